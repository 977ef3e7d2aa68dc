pub mod booking;
pub mod owner;
pub mod pet;
pub mod sitter;
