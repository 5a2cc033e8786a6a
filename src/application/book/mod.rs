mod book_service;
mod dto;
mod errors;

pub use book_service::{ServiceDependencies, add_book, find_book_by_id, loan_book, return_book};
pub use dto::BookDto;
pub use errors::{BookApplicationError, Result};
