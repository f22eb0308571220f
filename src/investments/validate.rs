use serde_json::Value;

use crate::investments::dto::CreateInvestmentRequest;

/// Accepts JSON numbers and numeric strings, nothing else. Booleans, nulls
/// and non-numeric strings all fail coercion.
pub(crate) fn coerce_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Pure shape check over the investment body, every finding at once.
pub fn validate_investment(body: &CreateInvestmentRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if body
        .farmer_name
        .as_deref()
        .map_or(true, |s| s.trim().is_empty())
    {
        errors.push("farmer_name is required and must be a non-empty string".to_string());
    }

    match body.amount.as_ref().and_then(coerce_amount) {
        Some(amount) if amount > 0.0 => {}
        _ => errors.push("amount is required and must be a positive number".to_string()),
    }

    if body.crop.as_deref().map_or(true, |s| s.trim().is_empty()) {
        errors.push("crop is required and must be a non-empty string".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(farmer_name: Option<&str>, amount: Option<Value>, crop: Option<&str>) -> CreateInvestmentRequest {
        CreateInvestmentRequest {
            farmer_name: farmer_name.map(String::from),
            amount,
            crop: crop.map(String::from),
        }
    }

    #[test]
    fn valid_body_has_no_findings() {
        let errors = validate_investment(&body(Some("John Doe"), Some(json!(5000.0)), Some("Wheat")));
        assert!(errors.is_empty());
    }

    #[test]
    fn numeric_string_amount_is_accepted() {
        let errors = validate_investment(&body(Some("John Doe"), Some(json!("100")), Some("Wheat")));
        assert!(errors.is_empty());
        assert_eq!(coerce_amount(&json!("100")), Some(100.0));
    }

    #[test]
    fn bad_amounts_are_rejected() {
        for bad in [json!(-5), json!(0), json!("abc"), json!(true), json!(null)] {
            let errors = validate_investment(&body(Some("John Doe"), Some(bad.clone()), Some("Wheat")));
            assert_eq!(
                errors,
                vec!["amount is required and must be a positive number"],
                "amount: {bad}"
            );
        }
    }

    #[test]
    fn missing_amount_is_rejected() {
        let errors = validate_investment(&body(Some("John Doe"), None, Some("Wheat")));
        assert_eq!(errors, vec!["amount is required and must be a positive number"]);
    }

    #[test]
    fn blank_strings_fail_after_trim() {
        let errors = validate_investment(&body(Some("   "), Some(json!(100)), Some("")));
        assert_eq!(
            errors,
            vec![
                "farmer_name is required and must be a non-empty string",
                "crop is required and must be a non-empty string",
            ]
        );
    }

    #[test]
    fn empty_body_reports_every_field_in_order() {
        let errors = validate_investment(&body(None, None, None));
        assert_eq!(
            errors,
            vec![
                "farmer_name is required and must be a non-empty string",
                "amount is required and must be a positive number",
                "crop is required and must be a non-empty string",
            ]
        );
    }
}
