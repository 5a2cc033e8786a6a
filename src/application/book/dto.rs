use chrono::{DateTime, Utc};

use crate::domain::book::Book;

/// ユースケースが返す書籍の公開情報
///
/// エンティティの内部構造を外に出さないためのデータ構造。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Book> for BookDto {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().value().to_string(),
            title: book.title().value().to_string(),
            is_available: book.is_available(),
            created_at: book.created_at(),
            updated_at: book.updated_at(),
        }
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self::from(&book)
    }
}
