use crate::domain::{Book, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// ストアの種類（PostgreSQL、インメモリなど）に依存しない永続化の抽象。
/// 下位のストアで発生した障害（接続断、制約違反など）は不透明なエラーとして返す。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍を保存する
    ///
    /// IDを持たない書籍には新しいIDを採番する。
    /// 既存IDの場合はレコード全体を置き換える（upsert）。
    /// 保存後の書籍を返す。
    async fn save(&self, book: Book) -> Result<Book>;

    /// 全書籍をストアの順序で取得する
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// 指定IDの書籍が存在するか確認する
    async fn exists_by_id(&self, id: BookId) -> Result<bool>;

    /// 指定IDの書籍を削除する
    async fn delete_by_id(&self, id: BookId) -> Result<()>;
}
