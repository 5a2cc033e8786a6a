use chrono::{DateTime, Utc};

use super::{Availability, BookId, BookRuleViolation, BookTitle};

/// Book集約 - カタログに登録された1冊の書籍
///
/// フィールドはすべて非公開。`id`・`title`・`created_at`は生成時にのみ設定され、
/// 貸出状態と`updated_at`は`loan()`/`return_book()`を通してのみ変化する。
/// `version`は楽観的排他制御のトークンで、リポジトリが更新のたびに1ずつ増やす。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    // 識別子
    id: BookId,

    // カタログ情報
    title: BookTitle,

    // 貸出管理の責務
    availability: Availability,

    // 監査情報
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,

    // 楽観的排他制御
    version: i64,
}

impl Book {
    /// 新しい書籍を登録する
    ///
    /// ビジネスルール：
    /// - 登録直後は貸出可能
    /// - created_at と updated_at は同じ時刻
    pub fn register(id: BookId, title: BookTitle, registered_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            availability: Availability::Available,
            created_at: registered_at,
            updated_at: registered_at,
            version: 0,
        }
    }

    /// 永続化された状態から書籍を復元する
    pub fn reconstruct(
        id: BookId,
        title: BookTitle,
        availability: Availability,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        version: i64,
    ) -> Self {
        Self {
            id,
            title,
            availability,
            created_at,
            updated_at,
            version,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 保存済みの版数（登録直後は0）
    pub fn version(&self) -> i64 {
        self.version
    }

    /// 貸し出す
    ///
    /// # エラー
    /// 既に貸出中の場合は`BookRuleViolation::AlreadyOnLoan`を返し、状態は変化しない
    pub fn loan(&mut self, loaned_at: DateTime<Utc>) -> Result<(), BookRuleViolation> {
        if self.availability.is_on_loan() {
            return Err(BookRuleViolation::AlreadyOnLoan);
        }

        self.availability = Availability::OnLoan;
        self.updated_at = loaned_at;
        Ok(())
    }

    /// 返却する
    ///
    /// # エラー
    /// 貸出中でない場合は`BookRuleViolation::AlreadyAvailable`を返し、状態は変化しない
    pub fn return_book(&mut self, returned_at: DateTime<Utc>) -> Result<(), BookRuleViolation> {
        if self.availability.is_available() {
            return Err(BookRuleViolation::AlreadyAvailable);
        }

        self.availability = Availability::Available;
        self.updated_at = returned_at;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_book(registered_at: DateTime<Utc>) -> Book {
        Book::register(
            BookId::new("book-1"),
            BookTitle::new("Clean Architecture").unwrap(),
            registered_at,
        )
    }

    #[test]
    fn test_register_creates_available_book() {
        let now = Utc::now();
        let book = new_book(now);

        assert_eq!(book.id().value(), "book-1");
        assert_eq!(book.title().value(), "Clean Architecture");
        assert!(book.is_available());
        assert_eq!(book.created_at(), now);
        assert_eq!(book.updated_at(), now);
        assert_eq!(book.version(), 0);
    }

    #[test]
    fn test_reconstruct_keeps_stored_state() {
        let created_at = Utc::now();
        let updated_at = created_at + Duration::hours(3);

        let book = Book::reconstruct(
            BookId::new("book-9"),
            BookTitle::new("Domain-Driven Design").unwrap(),
            Availability::OnLoan,
            created_at,
            updated_at,
            4,
        );

        assert!(!book.is_available());
        assert_eq!(book.availability(), Availability::OnLoan);
        assert_eq!(book.created_at(), created_at);
        assert_eq!(book.updated_at(), updated_at);
        assert_eq!(book.version(), 4);
    }

    #[test]
    fn test_loan_success() {
        let registered_at = Utc::now();
        let mut book = new_book(registered_at);
        let loaned_at = registered_at + Duration::days(1);

        book.loan(loaned_at).unwrap();

        assert!(!book.is_available());
        assert_eq!(book.updated_at(), loaned_at);
        assert_eq!(book.created_at(), registered_at);
        // 版数はリポジトリが管理する
        assert_eq!(book.version(), 0);
    }

    #[test]
    fn test_loan_fails_when_already_on_loan() {
        let registered_at = Utc::now();
        let mut book = new_book(registered_at);
        let loaned_at = registered_at + Duration::days(1);
        book.loan(loaned_at).unwrap();

        // 2回目の貸出は失敗し、状態は変わらない
        let before = book.clone();
        let result = book.loan(loaned_at + Duration::days(1));
        assert_eq!(result.unwrap_err(), BookRuleViolation::AlreadyOnLoan);
        assert_eq!(book, before);
    }

    #[test]
    fn test_return_success() {
        let registered_at = Utc::now();
        let mut book = new_book(registered_at);
        book.loan(registered_at + Duration::days(1)).unwrap();

        let returned_at = registered_at + Duration::days(8);
        book.return_book(returned_at).unwrap();

        assert!(book.is_available());
        assert_eq!(book.updated_at(), returned_at);
    }

    #[test]
    fn test_return_fails_on_fresh_book() {
        let registered_at = Utc::now();
        let mut book = new_book(registered_at);

        let result = book.return_book(registered_at + Duration::days(1));
        assert_eq!(result.unwrap_err(), BookRuleViolation::AlreadyAvailable);
        assert!(book.is_available());
        assert_eq!(book.updated_at(), registered_at);
    }

    #[test]
    fn test_loan_return_cycle_can_repeat() {
        let mut at = Utc::now();
        let mut book = new_book(at);

        for _ in 0..3 {
            at += Duration::days(1);
            book.loan(at).unwrap();
            at += Duration::days(1);
            book.return_book(at).unwrap();
        }

        assert!(book.is_available());
        assert_eq!(book.updated_at(), at);
    }
}
