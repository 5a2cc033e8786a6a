use crate::domain::{book::Book, value_objects::BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// 永続化の抽象。ストレージアダプター（PostgreSQL、インメモリ）が実装する。
/// 「見つからない」は正常な結果として`None`で返し、ストレージ障害のみを`Err`とする。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 新しい書籍を保存する
    ///
    /// 保存後の表現を返す（タイムスタンプの精度はストレージに合わせて丸められることがある）。
    /// IDの重複や接続障害はエラーとなる。
    async fn create(&self, book: &Book) -> Result<Book>;

    /// IDで書籍を取得する
    async fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>>;

    /// 書籍の貸出状態を更新する（楽観的排他制御）
    ///
    /// 保存済みの`version`が`expected_version`と一致する場合のみ、
    /// 貸出状態と`updated_at`をアトミックに書き換え、`version`を1増やす。
    /// 一致する行がなければ`None`を返す。
    async fn update(&self, book: &Book, expected_version: i64) -> Result<Option<Book>>;
}
