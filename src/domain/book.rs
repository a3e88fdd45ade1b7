use serde::{Deserialize, Serialize};

use super::{BookId, Category, Distribution};

/// 書籍エンティティ
///
/// `id`は新規作成時には存在せず、ストアへの初回保存で採番される。
/// 更新は常にレコード全体の置き換えとなり、部分更新は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<BookId>,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub distribution: Distribution,
}

impl Book {
    /// IDを持たない新規の書籍を作成する
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: Category,
        distribution: Distribution,
    ) -> Self {
        Self {
            id: None,
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            category,
            distribution,
        }
    }

    /// IDを付与した書籍を返す
    pub fn with_id(self, id: BookId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
