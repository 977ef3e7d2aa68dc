pub mod handlers;
pub mod models;
pub mod repo;
pub mod routes;
pub mod utils;
