pub mod auth;
pub mod config;
pub mod errors;

pub use auth::AuthUtils;
pub use config::AppConfig;
pub use errors::ApiError;
