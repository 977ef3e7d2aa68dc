use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::owner::Owner;
use crate::utils::errors::ApiError;

#[async_trait]
pub trait OwnerTrait {
    async fn get_all_owners(&self) -> Result<Vec<Owner>, ApiError>;
    async fn get_owner_by_id(&self, id: ObjectId) -> Result<Option<Owner>, ApiError>;
    async fn update_owner(&self, owner: &Owner) -> Result<(), ApiError>;
}
