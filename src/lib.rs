pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod health;
pub mod investments;
pub mod state;
