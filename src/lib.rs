pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};
use std::time::Instant;

use crate::store::TransactionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: TransactionStore,
    pub strict_refunds: bool,
    pub start_time: Instant,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/pay", post(handlers::payments::pay))
        .route("/refund", post(handlers::payments::refund))
        .route("/transactions/:id", get(handlers::payments::get_transaction))
        .layer(axum::middleware::from_fn(
            middleware::request_logger::request_logger_middleware,
        ))
        .with_state(state)
}
