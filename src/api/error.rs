use crate::application::book::BookApplicationError;
use crate::domain::BookRuleViolation;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、リクエストボディの不備をHTTPレスポンスへマッピングする。
#[derive(Debug)]
pub enum ApiError {
    /// ユースケースが返したエラー
    Application(BookApplicationError),
    /// JSONとして解釈できないリクエストボディ
    InvalidRequestBody(String),
}

impl From<BookApplicationError> for ApiError {
    fn from(err: BookApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - 入力値の不備
            ApiError::InvalidRequestBody(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::Application(BookApplicationError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }

            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::Application(BookApplicationError::BookNotFound) => (
                StatusCode::NOT_FOUND,
                "BOOK_NOT_FOUND",
                "Book not found".to_string(),
            ),

            // 422 Unprocessable Entity - ビジネスルール違反
            ApiError::Application(BookApplicationError::DomainRuleViolation(violation)) => {
                let error_type = match violation {
                    BookRuleViolation::AlreadyOnLoan => "BOOK_ALREADY_ON_LOAN",
                    BookRuleViolation::AlreadyAvailable => "BOOK_ALREADY_AVAILABLE",
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    error_type,
                    violation.to_string(),
                )
            }

            // 409 Conflict - 同時更新
            ApiError::Application(BookApplicationError::ConcurrentModification) => (
                StatusCode::CONFLICT,
                "CONCURRENT_MODIFICATION",
                "Book was modified by another request, please retry".to_string(),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(BookApplicationError::PersistenceError(e)) => {
                tracing::error!("Persistence error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
