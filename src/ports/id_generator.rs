use crate::domain::value_objects::BookId;

/// 書籍ID生成ポート
///
/// 一意性は生成器自身の保証に依存し、最終的な判定はストレージの一意制約が行う。
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> BookId;
}
