use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BookId;

/// コマンド：書籍を登録する
///
/// タイトルはアプリケーション層で検証されるため、ここでは生の文字列を持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBook {
    pub title: String,
    pub registered_at: DateTime<Utc>,
}

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanBook {
    pub book_id: BookId,
    pub loaned_at: DateTime<Utc>,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub returned_at: DateTime<Utc>,
}
