use crate::domain::{book::Book, value_objects::BookId};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// インメモリのBookRepository実装
///
/// DATABASE_URLが未設定の場合の保存先、およびテスト用のフェイクとして使う。
/// 書籍IDの一意性と`version`による条件付き更新をMutexの内側で保証する。
#[derive(Default)]
pub struct BookRepository {
    books: Mutex<HashMap<BookId, Book>>,
    failing: AtomicBool,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の呼び出しをストレージ障害として失敗させる（テスト用）
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// 保存されている書籍の件数
    pub fn len(&self) -> usize {
        match self.books.lock() {
            Ok(books) => books.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("storage unavailable".into());
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn create(&self, book: &Book) -> Result<Book> {
        self.check_available()?;
        let mut books = self.books.lock().map_err(|_| "book store lock poisoned")?;

        if books.contains_key(book.id()) {
            return Err(format!("duplicate book id: {}", book.id()).into());
        }

        books.insert(book.id().clone(), book.clone());
        Ok(book.clone())
    }

    async fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>> {
        self.check_available()?;
        let books = self.books.lock().map_err(|_| "book store lock poisoned")?;
        Ok(books.get(book_id).cloned())
    }

    async fn update(&self, book: &Book, expected_version: i64) -> Result<Option<Book>> {
        self.check_available()?;
        let mut books = self.books.lock().map_err(|_| "book store lock poisoned")?;

        match books.get_mut(book.id()) {
            Some(stored) if stored.version() == expected_version => {
                // 貸出状態と更新日時のみを書き換える
                let updated = Book::reconstruct(
                    stored.id().clone(),
                    stored.title().clone(),
                    book.availability(),
                    stored.created_at(),
                    book.updated_at(),
                    stored.version() + 1,
                );
                *stored = updated.clone();
                Ok(Some(updated))
            }
            _ => Ok(None),
        }
    }
}
