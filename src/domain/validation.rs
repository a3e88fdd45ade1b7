//! 書籍フィールドのバリデーションルール
//!
//! すべて副作用のない全域関数。空文字列は制約違反として扱う。
//! 文字数はバイト数ではなくUnicodeスカラー値の数で数える。

use super::{Book, ValidationError};

/// ISBNの最小文字数
pub const ISBN_MIN_CHARS: usize = 10;
/// 著者名の最小文字数
pub const AUTHOR_MIN_CHARS: usize = 3;
/// タイトルの最小文字数
pub const TITLE_MIN_CHARS: usize = 4;

pub fn is_isbn_valid(isbn: &str) -> bool {
    isbn.chars().count() >= ISBN_MIN_CHARS
}

pub fn is_author_valid(author: &str) -> bool {
    author.chars().count() >= AUTHOR_MIN_CHARS
}

/// タイトルは3文字より長いこと
pub fn is_title_valid(title: &str) -> bool {
    title.chars().count() >= TITLE_MIN_CHARS
}

fn check_author(book: &Book) -> Result<(), ValidationError> {
    if is_author_valid(&book.author) {
        Ok(())
    } else {
        Err(ValidationError::AuthorTooShort)
    }
}

fn check_title(book: &Book) -> Result<(), ValidationError> {
    if is_title_valid(&book.title) {
        Ok(())
    } else {
        Err(ValidationError::TitleTooShort)
    }
}

fn check_isbn(book: &Book) -> Result<(), ValidationError> {
    if is_isbn_valid(&book.isbn) {
        Ok(())
    } else {
        Err(ValidationError::IsbnTooShort)
    }
}

/// 新規作成時の検証（著者 → タイトル → ISBN の順）
///
/// 最初に違反したルールのみを返す。
pub fn validate_for_create(book: &Book) -> Result<(), ValidationError> {
    check_author(book)?;
    check_title(book)?;
    check_isbn(book)
}

/// 更新時の検証（タイトル → 著者 → ISBN の順）
pub fn validate_for_update(book: &Book) -> Result<(), ValidationError> {
    check_title(book)?;
    check_author(book)?;
    check_isbn(book)
}
