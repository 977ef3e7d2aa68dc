use actix_web::{web, HttpResponse, Responder, ResponseError};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::models::booking::{
    parse_booking_date, Booking, BookingCreateReceive, BookingDatesReceive, BookingStatus,
    BookingStatusReceive, BookingView,
};
use crate::repo::database_repository::MongoRepository;
use crate::repo::traits::booking_trait::BookingTrait;
use crate::repo::traits::owner_trait::OwnerTrait;
use crate::repo::traits::sitter_trait::SitterTrait;
use crate::handlers::parse_oid;
use crate::utils::errors::ApiError;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Owner and sitter references are resolved to their public documents; an
/// orphaned reference resolves to null rather than failing the request. The
/// opaque `pet_id` stays as-is, with a best-effort `pet` match alongside.
async fn resolve_booking(
    repo: &MongoRepository,
    booking: Booking,
) -> Result<BookingView, ApiError> {
    let owner = repo.get_owner_by_id(booking.owner_id).await?;
    let sitter = repo.get_sitter_by_id(booking.sitter_id).await?;
    let pet = owner.as_ref().and_then(|owner| {
        ObjectId::parse_str(&booking.pet_id)
            .ok()
            .and_then(|pet_id| owner.pet(&pet_id).cloned())
    });

    Ok(BookingView {
        id: booking.id.map(|id| id.to_hex()).unwrap_or_default(),
        owner_id: owner.map(|o| o.to_send()),
        sitter_id: sitter.map(|s| s.to_send()),
        pet_id: booking.pet_id,
        pet,
        start_date: booking.start_date,
        end_date: booking.end_date,
        status: booking.status,
        created_at: booking.created_at,
    })
}

pub async fn create_booking(
    repo: web::Data<MongoRepository>,
    receive: web::Json<BookingCreateReceive>,
) -> impl Responder {
    let receive = receive.into_inner();

    let (Some(owner_raw), Some(sitter_raw), Some(pet_id), Some(start_raw), Some(end_raw)) = (
        non_empty(&receive.owner_id),
        non_empty(&receive.sitter_id),
        non_empty(&receive.pet_id),
        non_empty(&receive.start_date),
        non_empty(&receive.end_date),
    ) else {
        return HttpResponse::BadRequest().json(json!({ "message": "All fields are required." }));
    };

    let owner_id = match parse_oid(owner_raw, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };
    let sitter_id = match parse_oid(sitter_raw, "sitter") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };
    let (Some(start_date), Some(end_date)) =
        (parse_booking_date(start_raw), parse_booking_date(end_raw))
    else {
        return HttpResponse::BadRequest().json(json!({ "message": "Invalid date format" }));
    };

    // Existence checks happen at creation time only; nothing re-validates
    // these references later. The pet id is deliberately not checked against
    // the owner's pet list.
    let owner = match repo.get_owner_by_id(owner_id).await {
        Ok(owner) => owner,
        Err(e) => return e.error_response(),
    };
    let sitter = match repo.get_sitter_by_id(sitter_id).await {
        Ok(sitter) => sitter,
        Err(e) => return e.error_response(),
    };
    if owner.is_none() || sitter.is_none() {
        return HttpResponse::NotFound().json(json!({ "message": "Owner or Sitter not found." }));
    }

    let booking = Booking::new(
        owner_id,
        sitter_id,
        pet_id.to_string(),
        Some(start_date),
        Some(end_date),
    );

    match repo.create_booking(booking).await {
        Ok(booking) => HttpResponse::Created().json(json!({
            "message": "Booking created successfully.",
            "booking": booking
        })),
        Err(e) => e.error_response(),
    }
}

pub async fn get_all_bookings(repo: web::Data<MongoRepository>) -> impl Responder {
    let bookings = match repo.get_all_bookings().await {
        Ok(bookings) => bookings,
        Err(e) => return e.error_response(),
    };

    let mut views = Vec::with_capacity(bookings.len());
    for booking in bookings {
        match resolve_booking(&repo, booking).await {
            Ok(view) => views.push(view),
            Err(e) => return e.error_response(),
        }
    }

    HttpResponse::Ok().json(views)
}

pub async fn get_booking_by_id(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match parse_oid(&path, "booking") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    match repo.get_booking_by_id(id).await {
        Ok(Some(booking)) => match resolve_booking(&repo, booking).await {
            Ok(view) => HttpResponse::Ok().json(view),
            Err(e) => e.error_response(),
        },
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Booking not found" })),
        Err(e) => e.error_response(),
    }
}

/// An empty result set is a 404 here, not an empty array. Deliberate quirk,
/// kept for wire compatibility.
pub async fn get_bookings_by_sitter(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
) -> impl Responder {
    let sitter_id = match parse_oid(&path, "sitter") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    match repo.get_bookings_by_sitter(sitter_id).await {
        Ok(bookings) if bookings.is_empty() => HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "No bookings found for this sitter"
        })),
        Ok(bookings) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": bookings
        })),
        Err(e) => e.error_response(),
    }
}

pub async fn get_bookings_by_owner(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
) -> impl Responder {
    let owner_id = match parse_oid(&path, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    match repo.get_bookings_by_owner(owner_id).await {
        Ok(bookings) if bookings.is_empty() => HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "No bookings found for this owner"
        })),
        Ok(bookings) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": bookings
        })),
        Err(e) => e.error_response(),
    }
}

pub async fn update_booking_status(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
    receive: web::Json<BookingStatusReceive>,
) -> impl Responder {
    // Status is validated before the lookup, so an invalid value never
    // touches the store.
    let status = match receive.status.as_deref().and_then(BookingStatus::parse) {
        Some(status) => status,
        None => {
            return HttpResponse::BadRequest().json(json!({ "message": "Invalid status" }));
        }
    };

    let id = match parse_oid(&path, "booking") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    match repo.update_booking_status(id, status).await {
        Ok(Some(booking)) => HttpResponse::Ok().json(json!({
            "message": "Booking status updated",
            "booking": booking
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Booking not found" })),
        Err(e) => e.error_response(),
    }
}

pub async fn update_booking_dates(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
    receive: web::Json<BookingDatesReceive>,
) -> impl Responder {
    let (Some(start_raw), Some(end_raw)) =
        (non_empty(&receive.start_date), non_empty(&receive.end_date))
    else {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Both startDate and endDate are required." }));
    };

    // No ordering or range validation: end before start is accepted.
    let (Some(start_date), Some(end_date)) =
        (parse_booking_date(start_raw), parse_booking_date(end_raw))
    else {
        return HttpResponse::BadRequest().json(json!({ "message": "Invalid date format" }));
    };

    let id = match parse_oid(&path, "booking") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    match repo.update_booking_dates(id, start_date, end_date).await {
        Ok(Some(booking)) => HttpResponse::Ok().json(json!({
            "message": "Booking dates updated successfully",
            "booking": booking
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Booking not found" })),
        Err(e) => e.error_response(),
    }
}

pub async fn delete_booking(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match parse_oid(&path, "booking") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    match repo.delete_booking(id).await {
        Ok(true) => HttpResponse::Ok().json(json!({ "message": "Booking deleted successfully" })),
        Ok(false) => HttpResponse::NotFound().json(json!({ "message": "Booking not found" })),
        Err(e) => e.error_response(),
    }
}
