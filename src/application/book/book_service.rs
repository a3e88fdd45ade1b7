use crate::domain::{Book, BookId, validation};
use crate::ports::{self, BookRepository};
use std::sync::Arc;

use super::errors::{BookApplicationError, Operation, Result};

/// サービスの依存関係
///
/// 振る舞いは持たず、各ユースケース関数に明示的に渡される。
/// リポジトリの実装（PostgreSQL、インメモリ）は組み立て時に差し替える。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
}

impl ServiceDependencies {
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }
}

/// 指定IDの書籍がストアに存在するか確認する
///
/// バリデーションのうちストアに依存する唯一のルール。
/// ストアのエラーはそのまま返し、操作名の付与は呼び出し側で行う。
pub async fn id_exists(deps: &ServiceDependencies, id: BookId) -> ports::Result<bool> {
    deps.book_repository.exists_by_id(id).await
}

/// 書籍を登録する
///
/// ビジネスルール：
/// - 著者名が3文字以上であること
/// - タイトルが4文字以上であること
/// - ISBNが10文字以上であること
///
/// ルールは上記の順で検証され、最初の違反のみが返る。
/// リクエストに含まれるIDは無視され、ストアが新しいIDを採番する。
///
/// # 戻り値
/// 採番済みIDを含む保存後の書籍
pub async fn create_book(deps: &ServiceDependencies, book: Book) -> Result<Book> {
    // 1. フィールド検証
    if let Err(e) = validation::validate_for_create(&book) {
        tracing::debug!("Rejected book creation: {}", e);
        return Err(e.into());
    }

    // 2. 保存（IDはストアが採番）
    let book = Book { id: None, ..book };
    let created = deps
        .book_repository
        .save(book)
        .await
        .map_err(BookApplicationError::persistence(Operation::Create))?;

    if let Some(id) = created.id {
        tracing::info!("Book created: {}", id);
    }

    Ok(created)
}

/// 全書籍を取得する
///
/// フィルタリング・ページングは行わず、ストアの順序のまま返す。
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.book_repository
        .find_all()
        .await
        .map_err(BookApplicationError::persistence(Operation::List))
}

/// 書籍を更新する（全体置き換え）
///
/// ビジネスルール：
/// - IDが存在すること（IDを持たない書籍は存在しないものとして扱う）
/// - タイトル → 著者 → ISBN の順に検証する（登録時とは順序が異なる）
pub async fn update_book(deps: &ServiceDependencies, book: Book) -> Result<()> {
    // 1. 存在確認
    let Some(id) = book.id else {
        tracing::debug!("Rejected book update without id");
        return Err(BookApplicationError::NotFound);
    };

    let exists = id_exists(deps, id)
        .await
        .map_err(BookApplicationError::persistence(Operation::Update))?;

    if !exists {
        tracing::debug!("Rejected book update: {} not found", id);
        return Err(BookApplicationError::NotFound);
    }

    // 2. フィールド検証
    if let Err(e) = validation::validate_for_update(&book) {
        tracing::debug!("Rejected book update {}: {}", id, e);
        return Err(e.into());
    }

    // 3. 保存
    deps.book_repository
        .save(book)
        .await
        .map_err(BookApplicationError::persistence(Operation::Update))?;

    tracing::info!("Book updated: {}", id);

    Ok(())
}

/// 書籍を削除する
///
/// 削除済みのIDに対して再度呼び出した場合は`NotFound`となる。
pub async fn delete_book(deps: &ServiceDependencies, id: BookId) -> Result<()> {
    // 1. 存在確認
    let exists = id_exists(deps, id)
        .await
        .map_err(BookApplicationError::persistence(Operation::Delete))?;

    if !exists {
        tracing::debug!("Rejected book deletion: {} not found", id);
        return Err(BookApplicationError::NotFound);
    }

    // 2. 削除
    deps.book_repository
        .delete_by_id(id)
        .await
        .map_err(BookApplicationError::persistence(Operation::Delete))?;

    tracing::info!("Book deleted: {}", id);

    Ok(())
}
