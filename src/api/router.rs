use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, add_book, get_book_by_id, loan_book, return_book};

/// Creates the API router with all book catalogue endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Register a new book
/// - POST /books/:id/loan - Loan a book
/// - POST /books/:id/return - Return a book
///
/// Query endpoints (Read operations):
/// - GET /books/:id - Get book details
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", post(add_book))
        .route("/books/:id", get(get_book_by_id))
        .route("/books/:id/loan", post(loan_book))
        .route("/books/:id/return", post(return_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
