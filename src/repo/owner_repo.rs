use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::models::owner::Owner;
use crate::repo::database_repository::MongoRepository;
use crate::repo::traits::owner_trait::OwnerTrait;
use crate::utils::errors::ApiError;

const COLLECTION: &str = "owners";

#[async_trait]
impl OwnerTrait for MongoRepository {
    async fn get_all_owners(&self) -> Result<Vec<Owner>, ApiError> {
        let collection = self.collection::<Owner>(COLLECTION);
        let mut cursor = collection.find(doc! {}).await?;
        let mut owners = Vec::new();

        while let Some(owner) = cursor.next().await {
            owners.push(owner?);
        }

        Ok(owners)
    }

    async fn get_owner_by_id(&self, id: ObjectId) -> Result<Option<Owner>, ApiError> {
        let collection = self.collection::<Owner>(COLLECTION);
        Ok(collection.find_one(doc! { "_id": id }).await?)
    }

    async fn update_owner(&self, owner: &Owner) -> Result<(), ApiError> {
        let id = owner
            .id
            .ok_or_else(|| ApiError::BadRequest("Owner has no id".to_string()))?;
        let collection = self.collection::<Owner>(COLLECTION);
        collection.replace_one(doc! { "_id": id }, owner).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::owner::OwnerRegisterReceive;
    use crate::models::pet::PetReceive;

    async fn test_repo() -> Option<MongoRepository> {
        match MongoRepository::init("mongodb://localhost:27017", "petsitting_test").await {
            Ok(repo) => Some(repo),
            Err(_) => {
                println!("MongoDB not available, skipping test");
                None
            }
        }
    }

    #[tokio::test]
    async fn pets_round_trip_inside_the_owner_document() {
        let Some(repo) = test_repo().await else { return };

        let email = format!("owner+{}@example.com", ObjectId::new().to_hex());
        repo.register_profile(Owner::new(OwnerRegisterReceive {
            name: "John Doe".to_string(),
            email: email.clone(),
            phone: "1234567890".to_string(),
            password: "password123".to_string(),
            address: "123 Street, City".to_string(),
        }))
        .await
        .unwrap();

        let mut owner = repo.find_profile_by_email::<Owner>(&email).await.unwrap().unwrap();
        let pet_id = owner
            .add_pet(PetReceive {
                petname: "Rex".to_string(),
                pet_type: "dog".to_string(),
                petimage: None,
                petinfo: None,
            })
            .id;
        repo.update_owner(&owner).await.unwrap();

        let reloaded = repo.get_owner_by_id(owner.id.unwrap()).await.unwrap().unwrap();
        let pet = reloaded.pet(&pet_id).unwrap();
        assert_eq!(pet.petname, "Rex");
        assert_eq!(pet.openbooking, "no");
        assert_eq!(pet.booked, "no");
    }

    #[tokio::test]
    async fn missing_owner_resolves_to_none() {
        let Some(repo) = test_repo().await else { return };
        assert!(repo.get_owner_by_id(ObjectId::new()).await.unwrap().is_none());
    }
}
