use crate::domain::value_objects::BookId;
use crate::ports::id_generator::IdGenerator as IdGeneratorTrait;
use std::sync::atomic::{AtomicU64, Ordering};

/// IdGeneratorのモック実装
///
/// `book-1`, `book-2`, ... と予測可能なIDを生成する。
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGeneratorTrait for IdGenerator {
    fn generate(&self) -> BookId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        BookId::new(format!("book-{}", n))
    }
}
