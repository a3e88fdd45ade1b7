use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Book, BookId, Category, Distribution};

/// 書籍リクエスト（POST /books と PUT /books）
///
/// 文字列フィールドが欠けている場合は空文字列となり、バリデーションで弾かれる。
/// POSTでは`id`は無視される。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub category: Category,
    pub distribution: Distribution,
}

impl BookRequest {
    pub fn into_book(self) -> Book {
        Book {
            id: self.id.map(BookId::from_uuid),
            isbn: self.isbn,
            title: self.title,
            author: self.author,
            category: self.category,
            distribution: self.distribution,
        }
    }
}

/// 書籍レスポンス（POST /books と GET /books）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: Option<Uuid>,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub distribution: Distribution,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.map(|id| id.value()),
            isbn: book.isbn,
            title: book.title,
            author: book.author,
            category: book.category,
            distribution: book.distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_missing_strings_default_to_empty() {
        let req: BookRequest = serde_json::from_value(json!({
            "isbn": "1234567890",
            "category": "ROMANCE",
            "distribution": "PHYSICAL",
        }))
        .unwrap();

        let book = req.into_book();
        assert!(book.id.is_none());
        assert_eq!(book.title, "");
        assert_eq!(book.author, "");
        assert_eq!(book.category, Category::Romance);
    }

    #[test]
    fn test_request_requires_category() {
        let result = serde_json::from_value::<BookRequest>(json!({
            "isbn": "1234567890",
            "title": "Neuromancer",
            "author": "William Gibson",
            "distribution": "DIGITAL",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_from_book() {
        let id = BookId::new();
        let book = Book::new(
            "1234567890",
            "Neuromancer",
            "William Gibson",
            Category::ScienceFiction,
            Distribution::Digital,
        )
        .with_id(id);

        let value = serde_json::to_value(BookResponse::from(book)).unwrap();
        assert_eq!(value["id"], json!(id.value()));
        assert_eq!(value["category"], "SCIENCE_FICTION");
        assert_eq!(value["distribution"], "DIGITAL");
    }
}
