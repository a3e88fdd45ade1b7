use thiserror::Error;

/// 書籍のフィールド制約違反
///
/// ストアに到達する前に検出される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 著者名が3文字未満
    #[error("author must have at least 3 characters")]
    AuthorTooShort,

    /// タイトルが4文字未満
    #[error("title must have at least 4 characters")]
    TitleTooShort,

    /// ISBNが10文字未満
    #[error("isbn must have at least 10 characters")]
    IsbnTooShort,
}
