use crate::domain::{Book, BookId, Category, Distribution};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// `books`テーブルの行をBookに変換する
///
/// 列挙型の列はSCREAMING_SNAKE_CASEの名前で保存されている。
/// それ以外の値はInvalidDataエラーとする。
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    let category_str: &str = row.get("category");
    let category = Category::from_str(category_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    let distribution_str: &str = row.get("distribution");
    let distribution = Distribution::from_str(distribution_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Book {
        id: Some(BookId::from_uuid(row.get("id"))),
        isbn: row.get("isbn"),
        title: row.get("title"),
        author: row.get("author"),
        category,
        distribution,
    })
}

/// BookRepositoryのPostgreSQL実装
///
/// 更新系の呼び出しはそれぞれ1つのトランザクション内で実行し、成功時にコミットする。
/// コミットされないトランザクションはドロップ時にロールバックされる。
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// PostgreSQLコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    /// 書籍を挿入、またはレコード全体を置き換える（upsert）
    ///
    /// 置き換え時は`created_at`を更新しないため、一覧の順序は変わらない。
    async fn save(&self, book: Book) -> Result<Book> {
        let id = book.id.unwrap_or_else(BookId::new);
        let book = book.with_id(id);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO books (
                id,
                isbn,
                title,
                author,
                category,
                distribution
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id)
            DO UPDATE SET
                isbn = EXCLUDED.isbn,
                title = EXCLUDED.title,
                author = EXCLUDED.author,
                category = EXCLUDED.category,
                distribution = EXCLUDED.distribution
            "#,
        )
        .bind(id.value())
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.category.as_str())
        .bind(book.distribution.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(book)
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT
                id,
                isbn,
                title,
                author,
                category,
                distribution
            FROM books
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_book).collect()
    }

    async fn exists_by_id(&self, id: BookId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)
            "#,
        )
        .bind(id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: BookId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
