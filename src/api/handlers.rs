use crate::application::book::{
    ServiceDependencies, create_book as execute_create_book,
    delete_book as execute_delete_book, list_books as execute_list_books,
    update_book as execute_update_book,
};
use crate::domain::BookId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    messages::Locale,
    types::{BookRequest, BookResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
    pub locale: Locale,
}

impl AppState {
    fn error(&self, err: crate::application::book::BookApplicationError) -> ApiError {
        ApiError::new(err, self.locale)
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// POST /books - 書籍を登録
///
/// 成功時は201と採番済みIDを含む書籍を返す。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let created = execute_create_book(&state.service_deps, req.into_book())
        .await
        .map_err(|e| state.error(e))?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(created))))
}

/// PUT /books - 書籍を更新（全体置き換え）
///
/// 本文の`id`で対象を特定する。成功時は204（本文なし）。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<StatusCode, ApiError> {
    execute_update_book(&state.service_deps, req.into_book())
        .await
        .map_err(|e| state.error(e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /books/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    execute_delete_book(&state.service_deps, BookId::from_uuid(id))
        .await
        .map_err(|e| state.error(e))?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Query handlers
// ============================================================================

/// GET /books - 全書籍を取得
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_list_books(&state.service_deps)
        .await
        .map_err(|e| state.error(e))?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}
