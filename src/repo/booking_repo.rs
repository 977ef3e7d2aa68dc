use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::models::booking::{Booking, BookingStatus};
use crate::repo::database_repository::MongoRepository;
use crate::repo::traits::booking_trait::BookingTrait;
use crate::utils::errors::ApiError;

const COLLECTION: &str = "bookings";

#[async_trait]
impl BookingTrait for MongoRepository {
    async fn create_booking(&self, mut booking: Booking) -> Result<Booking, ApiError> {
        let collection = self.collection::<Booking>(COLLECTION);
        let result = collection.insert_one(&booking).await?;
        booking.id = result.inserted_id.as_object_id();
        Ok(booking)
    }

    async fn get_all_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let collection = self.collection::<Booking>(COLLECTION);
        let mut cursor = collection.find(doc! {}).await?;
        let mut bookings = Vec::new();

        while let Some(booking) = cursor.next().await {
            bookings.push(booking?);
        }

        Ok(bookings)
    }

    async fn get_booking_by_id(&self, id: ObjectId) -> Result<Option<Booking>, ApiError> {
        let collection = self.collection::<Booking>(COLLECTION);
        Ok(collection.find_one(doc! { "_id": id }).await?)
    }

    async fn get_bookings_by_sitter(&self, sitter_id: ObjectId) -> Result<Vec<Booking>, ApiError> {
        let collection = self.collection::<Booking>(COLLECTION);
        let mut cursor = collection.find(doc! { "sitterId": sitter_id }).await?;
        let mut bookings = Vec::new();

        while let Some(booking) = cursor.next().await {
            bookings.push(booking?);
        }

        Ok(bookings)
    }

    async fn get_bookings_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Booking>, ApiError> {
        let collection = self.collection::<Booking>(COLLECTION);
        let mut cursor = collection.find(doc! { "ownerId": owner_id }).await?;
        let mut bookings = Vec::new();

        while let Some(booking) = cursor.next().await {
            bookings.push(booking?);
        }

        Ok(bookings)
    }

    async fn update_booking_status(
        &self,
        id: ObjectId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, ApiError> {
        let collection = self.collection::<Booking>(COLLECTION);
        let Some(mut booking) = collection.find_one(doc! { "_id": id }).await? else {
            return Ok(None);
        };

        // Flat overwrite, any status to any status
        booking.status = status;
        collection.replace_one(doc! { "_id": id }, &booking).await?;
        Ok(Some(booking))
    }

    async fn update_booking_dates(
        &self,
        id: ObjectId,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Option<Booking>, ApiError> {
        let collection = self.collection::<Booking>(COLLECTION);
        let Some(mut booking) = collection.find_one(doc! { "_id": id }).await? else {
            return Ok(None);
        };

        // No ordering check between the two dates
        booking.start_date = Some(start_date);
        booking.end_date = Some(end_date);
        collection.replace_one(doc! { "_id": id }, &booking).await?;
        Ok(Some(booking))
    }

    async fn delete_booking(&self, id: ObjectId) -> Result<bool, ApiError> {
        let collection = self.collection::<Booking>(COLLECTION);
        let result = collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::parse_booking_date;

    async fn test_repo() -> Option<MongoRepository> {
        match MongoRepository::init("mongodb://localhost:27017", "petsitting_test").await {
            Ok(repo) => Some(repo),
            Err(_) => {
                println!("MongoDB not available, skipping test");
                None
            }
        }
    }

    fn sample_booking() -> Booking {
        Booking::new(
            ObjectId::new(),
            ObjectId::new(),
            ObjectId::new().to_hex(),
            parse_booking_date("2025-03-01"),
            parse_booking_date("2025-03-05"),
        )
    }

    #[tokio::test]
    async fn booking_lifecycle_against_local_mongo() {
        let Some(repo) = test_repo().await else { return };

        let created = repo.create_booking(sample_booking()).await.unwrap();
        let id = created.id.expect("insert assigns an id");
        assert_eq!(created.status, BookingStatus::Pending);

        let fetched = repo.get_booking_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.status, BookingStatus::Pending);
        assert_eq!(fetched.pet_id, created.pet_id);

        // completed -> pending is legal, the status field is unconstrained
        let updated = repo
            .update_booking_status(id, BookingStatus::Completed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Completed);
        let reverted = repo
            .update_booking_status(id, BookingStatus::Pending)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reverted.status, BookingStatus::Pending);
        assert_eq!(reverted.created_at.timestamp_millis(), created.created_at.timestamp_millis());

        // end before start is accepted as-is
        let start = parse_booking_date("2025-04-01").unwrap();
        let end = parse_booking_date("2025-03-01").unwrap();
        let redated = repo
            .update_booking_dates(id, start, end)
            .await
            .unwrap()
            .unwrap();
        assert!(redated.end_date.unwrap() < redated.start_date.unwrap());

        assert!(repo.delete_booking(id).await.unwrap());
        assert!(!repo.delete_booking(id).await.unwrap());
        assert!(repo.get_booking_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn filters_return_empty_for_unknown_references() {
        let Some(repo) = test_repo().await else { return };

        let nobody = ObjectId::new();
        assert!(repo.get_bookings_by_sitter(nobody).await.unwrap().is_empty());
        assert!(repo.get_bookings_by_owner(nobody).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_booking_returns_none() {
        let Some(repo) = test_repo().await else { return };

        let missing = ObjectId::new();
        assert!(repo
            .update_booking_status(missing, BookingStatus::Confirmed)
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .update_booking_dates(
                missing,
                parse_booking_date("2025-03-01").unwrap(),
                parse_booking_date("2025-03-05").unwrap(),
            )
            .await
            .unwrap()
            .is_none());
    }
}
