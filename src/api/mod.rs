//! Axum HTTP surface: shared state, router and handlers.
pub mod handlers;
pub mod routes;

pub use routes::{app, AppState};
