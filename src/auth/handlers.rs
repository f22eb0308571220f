use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, MeResponse, PublicUser, RegisterRequest, UserProfile},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo::User,
        validate::validate_registration,
    },
    error::ApiError,
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let errors = validate_registration(&payload);
    if !errors.is_empty() {
        warn!(?errors, "registration rejected");
        return Err(ApiError::Validation(errors));
    }

    // Validated non-empty above.
    let name = payload.name.unwrap_or_default().trim().to_string();
    let email = payload.email.unwrap_or_default().to_lowercase();
    let password = payload.password.unwrap_or_default();

    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(%email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let hash = hash_password(&password)?;

    // The pre-check above races with concurrent registrations; the unique
    // constraint on users.email is the authoritative signal.
    let user = match User::create(&state.db, &name, &email, &hash).await {
        Ok(u) => u,
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            warn!(%email, "email already registered (insert raced)");
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email, &user.name)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful".to_string(),
            user: PublicUser {
                id: user.id,
                name: user.name,
                email: user.email,
            },
            token,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    // Same rejection for unknown email and wrong password, so a caller
    // cannot probe which addresses are registered.
    let Some(user) = User::find_by_email(&state.db, &email.to_lowercase()).await? else {
        warn!("login with unknown email");
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    };

    if !verify_password(&password, &user.password) {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email, &user.name)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user: PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
        },
        token,
    }))
}

#[instrument(skip(state, claims))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = User::find_by_id(&state.db, claims.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(MeResponse {
        user: UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        },
    }))
}
