use mongodb::bson::oid::ObjectId;

use crate::utils::errors::ApiError;

pub mod booking_handlers;
pub mod owner_handlers;
pub mod sitter_handlers;

pub(crate) fn parse_oid(raw: &str, what: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid {} id", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_oid_flags_malformed_input() {
        assert!(parse_oid(&ObjectId::new().to_hex(), "booking").is_ok());
        assert!(matches!(
            parse_oid("not-an-id", "booking"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
