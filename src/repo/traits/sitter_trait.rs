use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::sitter::Sitter;
use crate::utils::errors::ApiError;

#[async_trait]
pub trait SitterTrait {
    async fn get_all_sitters(&self) -> Result<Vec<Sitter>, ApiError>;
    async fn get_sitter_by_id(&self, id: ObjectId) -> Result<Option<Sitter>, ApiError>;
    async fn update_sitter(&self, sitter: &Sitter) -> Result<(), ApiError>;
}
