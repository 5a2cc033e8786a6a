pub mod mock;
pub mod postgres;
pub mod uuid_generator;

pub use uuid_generator::UuidGenerator;
