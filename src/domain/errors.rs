use thiserror::Error;

/// 書籍の状態遷移ルール違反
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookRuleViolation {
    /// 貸出中の書籍をさらに貸し出そうとした
    #[error("book already on loan")]
    AlreadyOnLoan,
    /// 貸出可能な書籍を返却しようとした
    #[error("book already available")]
    AlreadyAvailable,
}

/// タイトルのバリデーションエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TitleError {
    /// 空文字列または空白のみ
    #[error("title must not be blank")]
    Blank,
}
