use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    investments::{
        dto::CreateInvestmentRequest,
        repo::Investment,
        validate::{coerce_amount, validate_investment},
    },
    state::AppState,
};

#[instrument(skip(state))]
pub async fn list_investments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Investment>>, ApiError> {
    let rows = Investment::list_all(&state.db).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn create_investment(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvestmentRequest>,
) -> Result<(StatusCode, Json<Investment>), ApiError> {
    let errors = validate_investment(&payload);
    if !errors.is_empty() {
        warn!(?errors, "investment rejected");
        return Err(ApiError::Validation(errors));
    }

    // Validated above.
    let farmer_name = payload.farmer_name.unwrap_or_default().trim().to_string();
    let amount = payload
        .amount
        .as_ref()
        .and_then(coerce_amount)
        .ok_or_else(|| ApiError::Validation(vec![
            "amount is required and must be a positive number".to_string(),
        ]))?;
    let crop = payload.crop.unwrap_or_default().trim().to_string();

    let id = Investment::create(&state.db, &farmer_name, amount, &crop).await?;

    // Re-fetch so the response carries the database-assigned timestamp.
    let row = Investment::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("created investment {id} not found on re-fetch"))?;

    info!(investment_id = %row.id, %farmer_name, "investment created");
    Ok((StatusCode::CREATED, Json(row)))
}
