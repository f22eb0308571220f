use serde::Deserialize;

/// Request body for creating an investment. `amount` stays a raw JSON value
/// so the validator can accept both numbers and numeric strings.
#[derive(Debug, Deserialize)]
pub struct CreateInvestmentRequest {
    pub farmer_name: Option<String>,
    pub amount: Option<serde_json::Value>,
    pub crop: Option<String>,
}
