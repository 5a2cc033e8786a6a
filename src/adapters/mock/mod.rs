pub mod book_repository;
pub mod id_generator;

pub use book_repository::BookRepository;
pub use id_generator::IdGenerator;
