use crate::domain::{
    book::Book,
    value_objects::{Availability, BookId, BookTitle},
};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// `books`テーブルの行をBookエンティティに変換
///
/// 取り出し時にもタイトルを再検証する。
/// 空のタイトルが保存されていた場合は不正データとしてエラーにする。
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    let title: String = row.try_get("title")?;
    let title = BookTitle::new(title).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    let is_available: bool = row.try_get("is_available")?;

    Ok(Book::reconstruct(
        BookId::new(row.try_get::<String, _>("id")?),
        title,
        Availability::from(is_available),
        row.try_get("created_at")?,
        row.try_get("updated_at")?,
        row.try_get::<i64, _>("version")?,
    ))
}

/// BookRepositoryのPostgreSQL実装
///
/// 書籍IDの一意性は主キー`id`が最終的に保証する。
/// タイムスタンプはマイクロ秒精度（TIMESTAMPTZ）で返る。
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// PostgreSQL接続プールから新しいBookRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    /// 新しい書籍を挿入し、保存された行を返す
    async fn create(&self, book: &Book) -> Result<Book> {
        let row = sqlx::query(
            r#"
            INSERT INTO books (
                id,
                title,
                is_available,
                created_at,
                updated_at,
                version
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, is_available, created_at, updated_at, version
            "#,
        )
        .bind(book.id().value())
        .bind(book.title().value())
        .bind(book.is_available())
        .bind(book.created_at())
        .bind(book.updated_at())
        .bind(book.version())
        .fetch_one(&self.pool)
        .await?;

        map_row_to_book(&row)
    }

    /// 主キーで書籍を検索
    async fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, is_available, created_at, updated_at, version
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }

    /// `version`による条件付き更新
    ///
    /// WHERE句で読み込み・変更・書き込みをアトミックにする。
    /// 先に別の更新が`version`を進めていれば一致する行は0件になる。
    async fn update(&self, book: &Book, expected_version: i64) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            UPDATE books
            SET is_available = $2,
                updated_at = $3,
                version = version + 1
            WHERE id = $1 AND version = $4
            RETURNING id, title, is_available, created_at, updated_at, version
            "#,
        )
        .bind(book.id().value())
        .bind(book.is_available())
        .bind(book.updated_at())
        .bind(expected_version)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }
}
