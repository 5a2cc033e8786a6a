pub mod book_repository;

// パブリックに型を再エクスポート
pub use book_repository::BookRepository as PostgresBookRepository;

use sqlx::PgPool;

/// `migrations/`配下のマイグレーションを適用する
///
/// 起動時とテストで同じマイグレーションを使う。
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
