use serde::{Deserialize, Serialize};

use super::TitleError;

/// 書籍ID - カタログ管理コンテキストの集約ID
///
/// 値の生成は`IdGenerator`ポートに任せ、ドメインは不透明な文字列として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 書籍タイトル
///
/// 不変条件：空文字列・空白のみのタイトルは作成できない。
/// 入力された文字列はそのまま保持する（トリムしない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookTitle(String);

impl BookTitle {
    /// # エラー
    /// 空または空白のみの場合は`TitleError::Blank`を返す
    pub fn new(value: impl Into<String>) -> Result<Self, TitleError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TitleError::Blank);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookTitle {
    type Error = TitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BookTitle> for String {
    fn from(title: BookTitle) -> Self {
        title.0
    }
}

/// 貸出可否
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// 貸出可能
    Available,
    /// 貸出中
    OnLoan,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    pub fn is_on_loan(&self) -> bool {
        matches!(self, Availability::OnLoan)
    }
}

impl From<bool> for Availability {
    fn from(is_available: bool) -> Self {
        if is_available {
            Availability::Available
        } else {
            Availability::OnLoan
        }
    }
}
