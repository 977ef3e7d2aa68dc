use mongodb::bson::doc;

use crate::repo::database_repository::MongoRepository;
use crate::repo::traits::credentialed::Credentialed;
use crate::utils::auth::AuthUtils;
use crate::utils::errors::ApiError;

/// Registration/login/hash-check implemented once for every credentialed
/// aggregate (owners and sitters) instead of per-kind copies.
impl MongoRepository {
    pub async fn register_profile<T: Credentialed>(&self, profile: T) -> Result<(), ApiError> {
        if profile.email().is_empty() {
            return Err(ApiError::BadRequest("Email cannot be empty".to_string()));
        }
        if self
            .find_profile_by_email::<T>(profile.email())
            .await?
            .is_some()
        {
            return Err(ApiError::BadRequest("User already exists".to_string()));
        }

        let collection = self.collection::<T>(T::COLLECTION);
        collection.insert_one(&profile).await?;
        Ok(())
    }

    pub async fn find_profile_by_email<T: Credentialed>(
        &self,
        email: &str,
    ) -> Result<Option<T>, ApiError> {
        let collection = self.collection::<T>(T::COLLECTION);
        Ok(collection.find_one(doc! { "email": email }).await?)
    }

    /// `None` covers both an unknown email and a password mismatch, the
    /// caller cannot tell which.
    pub async fn login_profile<T: Credentialed>(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<T>, ApiError> {
        match self.find_profile_by_email::<T>(email).await? {
            Some(profile) if AuthUtils::verify_hash(password, profile.password()) => {
                Ok(Some(profile))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::owner::{Owner, OwnerRegisterReceive};
    use crate::models::sitter::{Sitter, SitterRegisterReceive};

    async fn test_repo() -> Option<MongoRepository> {
        match MongoRepository::init("mongodb://localhost:27017", "petsitting_test").await {
            Ok(repo) => Some(repo),
            Err(_) => {
                println!("MongoDB not available, skipping test");
                None
            }
        }
    }

    fn unique_email(prefix: &str) -> String {
        format!("{}+{}@example.com", prefix, mongodb::bson::oid::ObjectId::new().to_hex())
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let Some(repo) = test_repo().await else { return };

        let email = unique_email("john");
        let receive = |email: &str| OwnerRegisterReceive {
            name: "John Doe".to_string(),
            email: email.to_string(),
            phone: "1234567890".to_string(),
            password: "password123".to_string(),
            address: "123 Street, City".to_string(),
        };

        repo.register_profile(Owner::new(receive(&email))).await.unwrap();

        let second = repo.register_profile(Owner::new(receive(&email))).await;
        assert!(matches!(second, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn login_checks_the_password_digest() {
        let Some(repo) = test_repo().await else { return };

        let email = unique_email("jane");
        repo.register_profile(Sitter::new(SitterRegisterReceive {
            name: "Jane Smith".to_string(),
            email: email.clone(),
            phone: "9876543210".to_string(),
            password: "password123".to_string(),
            address: "456 Avenue, City".to_string(),
        }))
        .await
        .unwrap();

        let hit = repo.login_profile::<Sitter>(&email, "password123").await.unwrap();
        assert!(hit.is_some());

        let miss = repo.login_profile::<Sitter>(&email, "wrong").await.unwrap();
        assert!(miss.is_none());

        let unknown = repo
            .login_profile::<Sitter>("nobody@example.com", "password123")
            .await
            .unwrap();
        assert!(unknown.is_none());
    }
}
