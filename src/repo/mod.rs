pub mod booking_repo;
pub mod database_repository;
pub mod owner_repo;
pub mod profile_repo;
pub mod sitter_repo;
pub mod traits;

pub use database_repository::MongoRepository;
