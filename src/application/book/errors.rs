use crate::domain::{BookRuleViolation, TitleError};
use thiserror::Error;

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// 入力値が不正（例: 空のタイトル）
    #[error("Validation error: {0}")]
    Validation(#[from] TitleError),

    /// 状態遷移のルール違反（貸出中の再貸出、貸出可能な書籍の返却）
    #[error("Domain rule violation: {0}")]
    DomainRuleViolation(#[from] BookRuleViolation),

    /// 書籍が見つからない（貸出・返却の対象）
    #[error("Book not found")]
    BookNotFound,

    /// 読み込みから書き込みまでの間に他のリクエストが書籍を更新した
    #[error("Book was modified concurrently")]
    ConcurrentModification,

    /// ストレージのエラー
    #[error("Persistence error: {0}")]
    PersistenceError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;
