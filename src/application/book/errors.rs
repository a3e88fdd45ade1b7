use crate::domain::ValidationError;
use thiserror::Error;

/// 永続化エラーが発生した操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "creating",
            Operation::List => "listing",
            Operation::Update => "updating",
            Operation::Delete => "deleting",
        }
    }
}

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// フィールド制約違反（ストアには到達しない）
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 指定IDの書籍が存在しない
    #[error("id not found.")]
    NotFound,

    /// ストアで発生したエラー
    #[error("error {}: {source}", .operation.as_str())]
    Persistence {
        operation: Operation,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BookApplicationError {
    /// ストアのエラーを操作名付きでラップするクロージャを返す
    pub(super) fn persistence(
        operation: Operation,
    ) -> impl FnOnce(Box<dyn std::error::Error + Send + Sync>) -> Self {
        move |source| BookApplicationError::Persistence { operation, source }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;
