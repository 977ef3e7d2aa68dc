use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;

use crate::models::booking::{Booking, BookingStatus};
use crate::utils::errors::ApiError;

/// Booking lifecycle store. Lookups return `None`/`false` for absent ids and
/// leave the 404 decision to the request boundary. Status updates are flat
/// overwrites: no transition graph is enforced here or anywhere else.
#[async_trait]
pub trait BookingTrait {
    async fn create_booking(&self, booking: Booking) -> Result<Booking, ApiError>;
    async fn get_all_bookings(&self) -> Result<Vec<Booking>, ApiError>;
    async fn get_booking_by_id(&self, id: ObjectId) -> Result<Option<Booking>, ApiError>;
    async fn get_bookings_by_sitter(&self, sitter_id: ObjectId) -> Result<Vec<Booking>, ApiError>;
    async fn get_bookings_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Booking>, ApiError>;
    async fn update_booking_status(
        &self,
        id: ObjectId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, ApiError>;
    async fn update_booking_dates(
        &self,
        id: ObjectId,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Option<Booking>, ApiError>;
    async fn delete_booking(&self, id: ObjectId) -> Result<bool, ApiError>;
}
