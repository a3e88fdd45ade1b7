use crate::domain::{Book, BookId};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// BookRepositoryのインメモリ実装
///
/// 挿入順に書籍を保持する。保存済みIDの書籍を保存した場合はその位置で置き換える。
pub struct BookRepository {
    books: Mutex<Vec<Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    /// 保存済みの書籍で初期化する（テスト用）
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    pub fn len(&self) -> usize {
        self.books.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn save(&self, book: Book) -> Result<Book> {
        let mut books = self.books.lock().unwrap();
        let id = book.id.unwrap_or_else(BookId::new);
        let saved = book.with_id(id);

        match books.iter().position(|stored| stored.id == Some(id)) {
            Some(index) => books[index] = saved.clone(),
            None => books.push(saved.clone()),
        }

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.books.lock().unwrap().clone())
    }

    async fn exists_by_id(&self, id: BookId) -> Result<bool> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .any(|book| book.id == Some(id)))
    }

    async fn delete_by_id(&self, id: BookId) -> Result<()> {
        self.books.lock().unwrap().retain(|book| book.id != Some(id));
        Ok(())
    }
}
