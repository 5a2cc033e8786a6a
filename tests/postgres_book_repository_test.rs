//! PostgreSQLアダプターのテスト
//!
//! 実データベースが必要なため既定では無視される。
//! `DATABASE_URL=... cargo test -- --ignored` で実行する。

mod common;

use chrono::{DateTime, Duration, Utc};
use rusty_library_catalogue::adapters::postgres::PostgresBookRepository;
use rusty_library_catalogue::domain::book::Book;
use rusty_library_catalogue::domain::value_objects::{BookId, BookTitle};
use rusty_library_catalogue::ports::BookRepository;
use serial_test::serial;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQLの時刻精度（マイクロ秒）に合わせて丸める
///
/// PostgreSQL TIMESTAMPTZはマイクロ秒精度（6桁）だが、
/// RustのDateTime<Utc>はナノ秒精度（9桁）を持つ。
fn truncate_to_micros(dt: DateTime<Utc>) -> DateTime<Utc> {
    let micros = dt.timestamp_micros();
    DateTime::from_timestamp_micros(micros).expect("Invalid timestamp")
}

fn new_book(title: &str) -> Book {
    Book::register(
        BookId::new(Uuid::new_v4().to_string()),
        BookTitle::new(title).unwrap(),
        Utc::now(),
    )
}

/// テストデータをクリーンアップ
async fn cleanup_book(pool: &PgPool, book_id: &BookId) {
    sqlx::query("DELETE FROM books WHERE id = $1")
        .bind(book_id.value())
        .execute(pool)
        .await
        .expect("Failed to cleanup test book");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_create_and_find_by_id() {
    let pool = common::create_test_pool().await;
    let repository = PostgresBookRepository::new(pool.clone());
    let book = new_book("Clean Architecture");

    let created = repository.create(&book).await.expect("Failed to create");

    assert_eq!(created.id(), book.id());
    assert_eq!(created.title(), book.title());
    assert!(created.is_available());
    assert_eq!(created.created_at(), truncate_to_micros(book.created_at()));
    assert_eq!(created.created_at(), created.updated_at());

    let found = repository
        .find_by_id(book.id())
        .await
        .expect("Failed to find")
        .expect("Book should exist");
    assert_eq!(found, created);

    cleanup_book(&pool, book.id()).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_find_by_id_returns_none_when_missing() {
    let pool = common::create_test_pool().await;
    let repository = PostgresBookRepository::new(pool);

    let found = repository
        .find_by_id(&BookId::new("nonexistent-id"))
        .await
        .expect("Failed to query");

    assert!(found.is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_create_duplicate_id_fails() {
    let pool = common::create_test_pool().await;
    let repository = PostgresBookRepository::new(pool.clone());
    let book = new_book("Refactoring");

    repository.create(&book).await.expect("Failed to create");
    let result = repository.create(&book).await;

    assert!(result.is_err());

    cleanup_book(&pool, book.id()).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_update_is_conditional_on_version() {
    let pool = common::create_test_pool().await;
    let repository = PostgresBookRepository::new(pool.clone());
    let created = repository
        .create(&new_book("Domain-Driven Design"))
        .await
        .expect("Failed to create");
    assert_eq!(created.version(), 0);
    let loaned_at = created.updated_at() + Duration::minutes(1);

    // 1回目：版数が一致するので更新され、版数が進む
    let mut first = created.clone();
    first.loan(loaned_at).unwrap();
    let updated = repository
        .update(&first, created.version())
        .await
        .expect("Failed to update")
        .expect("Row should match");
    assert!(!updated.is_available());
    assert_eq!(updated.updated_at(), truncate_to_micros(loaned_at));
    assert_eq!(updated.version(), 1);

    // 2回目：同じ時刻・古い版数では一致する行がない
    let mut second = created.clone();
    second.loan(loaned_at).unwrap();
    let conflict = repository
        .update(&second, created.version())
        .await
        .expect("Failed to update");
    assert!(conflict.is_none());

    let stored = repository
        .find_by_id(created.id())
        .await
        .expect("Failed to find")
        .expect("Book should exist");
    assert_eq!(stored, updated);

    cleanup_book(&pool, created.id()).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_update_at_unchanged_timestamp_still_bumps_version() {
    let pool = common::create_test_pool().await;
    let repository = PostgresBookRepository::new(pool.clone());
    let created = repository
        .create(&new_book("Refactoring"))
        .await
        .expect("Failed to create");

    // 保存済みの`updated_at`と同じ時刻で貸し出す
    let mut loaned = created.clone();
    loaned.loan(created.updated_at()).unwrap();
    let updated = repository
        .update(&loaned, created.version())
        .await
        .expect("Failed to update")
        .expect("Row should match");
    assert_eq!(updated.updated_at(), created.updated_at());
    assert_eq!(updated.version(), created.version() + 1);

    let mut rival = created.clone();
    rival.loan(created.updated_at()).unwrap();
    let conflict = repository
        .update(&rival, created.version())
        .await
        .expect("Failed to update");
    assert!(conflict.is_none());

    cleanup_book(&pool, created.id()).await;
}
