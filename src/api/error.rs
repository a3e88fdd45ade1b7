use crate::application::book::BookApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::messages::{Locale, error_message};

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// 本文は構造化せず、設定された言語のプレーンテキストとする。
#[derive(Debug)]
pub struct ApiError {
    error: BookApplicationError,
    locale: Locale,
}

impl ApiError {
    pub fn new(error: BookApplicationError, locale: Locale) -> Self {
        Self { error, locale }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            // 409 Conflict - フィールド制約違反
            BookApplicationError::Validation(_) => StatusCode::CONFLICT,
            // 404 Not Found - 指定IDの書籍が存在しない
            BookApplicationError::NotFound => StatusCode::NOT_FOUND,
            // 400 Bad Request - ストアでの失敗（原因をそのまま返す）
            BookApplicationError::Persistence { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let BookApplicationError::Persistence { .. } = self.error {
            tracing::error!("Persistence error: {}", self.error);
        }

        (status, error_message(self.locale, &self.error)).into_response()
    }
}
