use crate::domain::{
    BookRuleViolation,
    book::Book,
    commands::{AddBook, LoanBook, ReturnBook},
    value_objects::{BookId, BookTitle},
};
use crate::ports::*;
use std::sync::Arc;

use super::dto::BookDto;
use super::errors::{BookApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 具象アダプターは起動時に組み立てられ、ここに`Arc<dyn ...>`として渡される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub id_generator: Arc<dyn IdGenerator>,
}

/// リポジトリから書籍を取得するヘルパー関数
///
/// loan_book, return_bookで共通利用される。
///
/// # エラー
/// - PersistenceError: 読み込み失敗
/// - BookNotFound: 書籍が存在しない
async fn load_book(repository: &Arc<dyn BookRepository>, book_id: &BookId) -> Result<Book> {
    repository
        .find_by_id(book_id)
        .await
        .map_err(BookApplicationError::PersistenceError)?
        .ok_or(BookApplicationError::BookNotFound)
}

/// 書籍を読み込み、状態遷移を適用し、楽観的排他制御付きで保存する
///
/// 読み込み時点の`version`を期待値として`update`に渡す。
/// 他のリクエストが先に更新していた場合は`ConcurrentModification`となる。
async fn transition_book<F>(
    deps: &ServiceDependencies,
    book_id: &BookId,
    transition: F,
) -> Result<BookDto>
where
    F: FnOnce(&mut Book) -> std::result::Result<(), BookRuleViolation>,
{
    // 1. 現在の状態を取得
    let mut book = load_book(&deps.book_repository, book_id).await?;
    let expected_version = book.version();

    // 2. エンティティの状態遷移
    transition(&mut book)?;

    // 3. 条件付き更新
    let updated = deps
        .book_repository
        .update(&book, expected_version)
        .await
        .map_err(BookApplicationError::PersistenceError)?
        .ok_or(BookApplicationError::ConcurrentModification)?;

    Ok(BookDto::from(updated))
}

/// 書籍を登録する
///
/// 手順：
/// 1. タイトルを検証（空・空白のみは`Validation`エラー）
/// 2. IDを生成
/// 3. 貸出可能な状態で書籍を生成
/// 4. リポジトリに保存
///
/// 検証に失敗した場合は何も保存されない。
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<BookDto> {
    let title = BookTitle::new(cmd.title)?;
    let book_id = deps.id_generator.generate();
    let book = Book::register(book_id, title, cmd.registered_at);

    let created = deps
        .book_repository
        .create(&book)
        .await
        .map_err(BookApplicationError::PersistenceError)?;

    tracing::info!(book_id = %created.id(), "Book registered");

    Ok(BookDto::from(created))
}

/// IDで書籍を検索する
///
/// 見つからない場合は`Ok(None)`を返す（エラーではない）。
pub async fn find_book_by_id(
    deps: &ServiceDependencies,
    book_id: &BookId,
) -> Result<Option<BookDto>> {
    let book = deps
        .book_repository
        .find_by_id(book_id)
        .await
        .map_err(BookApplicationError::PersistenceError)?;

    Ok(book.map(BookDto::from))
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 書籍が貸出可能であること
///
/// 同じ書籍への同時貸出は楽観的排他制御により片方のみ成功する。
pub async fn loan_book(deps: &ServiceDependencies, cmd: LoanBook) -> Result<BookDto> {
    let dto = transition_book(deps, &cmd.book_id, |book| book.loan(cmd.loaned_at)).await?;

    tracing::info!(book_id = %cmd.book_id, "Book loaned");

    Ok(dto)
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 書籍が貸出中であること
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<BookDto> {
    let dto =
        transition_book(deps, &cmd.book_id, |book| book.return_book(cmd.returned_at)).await?;

    tracing::info!(book_id = %cmd.book_id, "Book returned");

    Ok(dto)
}
