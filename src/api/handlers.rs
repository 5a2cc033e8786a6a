use crate::application::book::{
    ServiceDependencies, add_book as execute_add_book, find_book_by_id as execute_find_book_by_id,
    loan_book as execute_loan_book, return_book as execute_return_book,
};
use crate::domain::{
    commands::{AddBook, LoanBook, ReturnBook},
    value_objects::BookId,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{AddBookRequest, BookResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /books - 書籍を登録
///
/// 登録された書籍は貸出可能な状態で作成される。
/// タイトルが空・空白のみ、またはボディが不正な場合は400を返す。
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::InvalidRequestBody(e.body_text()))?;

    let cmd = AddBook {
        title: req.title,
        registered_at: chrono::Utc::now(),
    };

    let book = execute_add_book(&state.service_deps, cmd).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// POST /books/:id/loan - 書籍を貸し出す
///
/// 強制されるビジネスルール:
/// - 書籍が存在すること
/// - 書籍が貸出可能であること
pub async fn loan_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    let cmd = LoanBook {
        book_id: BookId::new(book_id),
        loaned_at: chrono::Utc::now(),
    };

    let book = execute_loan_book(&state.service_deps, cmd).await?;

    Ok(Json(BookResponse::from(book)))
}

/// POST /books/:id/return - 書籍を返却
///
/// 強制されるビジネスルール:
/// - 書籍が存在すること
/// - 書籍が貸出中であること
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    let cmd = ReturnBook {
        book_id: BookId::new(book_id),
        returned_at: chrono::Utc::now(),
    };

    let book = execute_return_book(&state.service_deps, cmd).await?;

    Ok(Json(BookResponse::from(book)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/:id - 書籍詳細をIDで取得
///
/// 見つかった場合は書籍情報を返し、見つからない場合は404を返す。
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<BookResponse>, QueryError> {
    let book_id = BookId::new(book_id);

    match execute_find_book_by_id(&state.service_deps, &book_id).await {
        Ok(Some(book)) => Ok(Json(BookResponse::from(book))),
        Ok(None) => Err(QueryError::NotFound(format!("Book {} not found", book_id))),
        Err(e) => Err(QueryError::InternalError(e.to_string())),
    }
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    NotFound(String),
    InternalError(String),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::NotFound(msg) => (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", msg),
            QueryError::InternalError(msg) => {
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                tracing::error!("Internal error in query handler: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
