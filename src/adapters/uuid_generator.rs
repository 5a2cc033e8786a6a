use crate::domain::value_objects::BookId;
use crate::ports::id_generator::IdGenerator;
use uuid::Uuid;

/// UUID v4 による書籍ID生成器
///
/// 128ビットの乱数IDをハイフン付きの文字列として返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> BookId {
        BookId::new(Uuid::new_v4().to_string())
    }
}
