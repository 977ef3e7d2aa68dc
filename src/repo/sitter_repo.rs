use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::models::sitter::Sitter;
use crate::repo::database_repository::MongoRepository;
use crate::repo::traits::sitter_trait::SitterTrait;
use crate::utils::errors::ApiError;

const COLLECTION: &str = "sitters";

#[async_trait]
impl SitterTrait for MongoRepository {
    async fn get_all_sitters(&self) -> Result<Vec<Sitter>, ApiError> {
        let collection = self.collection::<Sitter>(COLLECTION);
        let mut cursor = collection.find(doc! {}).await?;
        let mut sitters = Vec::new();

        while let Some(sitter) = cursor.next().await {
            sitters.push(sitter?);
        }

        Ok(sitters)
    }

    async fn get_sitter_by_id(&self, id: ObjectId) -> Result<Option<Sitter>, ApiError> {
        let collection = self.collection::<Sitter>(COLLECTION);
        Ok(collection.find_one(doc! { "_id": id }).await?)
    }

    async fn update_sitter(&self, sitter: &Sitter) -> Result<(), ApiError> {
        let id = sitter
            .id
            .ok_or_else(|| ApiError::BadRequest("Sitter has no id".to_string()))?;
        let collection = self.collection::<Sitter>(COLLECTION);
        collection.replace_one(doc! { "_id": id }, sitter).await?;
        Ok(())
    }
}
