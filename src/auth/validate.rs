use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::dto::RegisterRequest;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Pure shape check over the registration body. Returns every finding so the
/// client sees all problems in one round trip.
pub fn validate_registration(body: &RegisterRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if body
        .name
        .as_deref()
        .map_or(true, |n| n.trim().chars().count() < 2)
    {
        errors.push("Name must be at least 2 characters".to_string());
    }

    if body.email.as_deref().map_or(true, |e| !is_valid_email(e)) {
        errors.push("Valid email is required".to_string());
    }

    if body.password.as_deref().map_or(true, |p| p.len() < 6) {
        errors.push("Password must be at least 6 characters".to_string());
    }

    errors
}
