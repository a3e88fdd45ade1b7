use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, create_book, delete_book, list_books, update_book};

/// Creates the API router with all book endpoints
///
/// - POST /books - Create a book
/// - GET /books - List all books
/// - PUT /books - Replace a book identified by the body's id
/// - DELETE /books/:id - Delete a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route(
            "/books",
            get(list_books).post(create_book).put(update_book),
        )
        .route("/books/:id", delete(delete_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
