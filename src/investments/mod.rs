use crate::state::AppState;
use axum::{routing::get, Router};

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod validate;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/investments",
        get(handlers::list_investments).post(handlers::create_investment),
    )
}
