pub mod booking_trait;
pub mod credentialed;
pub mod owner_trait;
pub mod sitter_trait;
