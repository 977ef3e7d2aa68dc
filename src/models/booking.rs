use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::owner::OwnerSend;
use crate::models::pet::Pet;
use crate::models::sitter::SitterSend;

/// Booking status. Exactly four literal values on the wire; anything else is
/// rejected at write time. There is NO transition graph: any status may be
/// overwritten with any other, including away from `completed`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// A reservation of a sitter by an owner for one pet over a date range.
///
/// `pet_id` is an opaque identifier: it is never validated against the
/// owner's pet list. Owner and sitter references are checked at creation time
/// only; orphaned references are tolerated afterwards. Dates are logically
/// required but not enforced non-null, and no ordering check exists between
/// them.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub owner_id: ObjectId,
    pub sitter_id: ObjectId,
    pub pet_id: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Status always starts as `pending` (the caller cannot choose it) and
    /// `created_at` is set once here, never mutated afterwards.
    pub fn new(
        owner_id: ObjectId,
        sitter_id: ObjectId,
        pet_id: String,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        Booking {
            id: None,
            owner_id,
            sitter_id,
            pet_id,
            start_date,
            end_date,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreateReceive {
    pub owner_id: Option<String>,
    pub sitter_id: Option<String>,
    pub pet_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BookingStatusReceive {
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingDatesReceive {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Denormalized read shape for list/getById: owner and sitter references are
/// replaced by the resolved public documents (null when orphaned), `pet_id`
/// stays raw and `pet` carries a best-effort match from the owner's list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub id: String,
    pub owner_id: Option<OwnerSend>,
    pub sitter_id: Option<SitterSend>,
    pub pet_id: String,
    pub pet: Option<Pet>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_booking_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> Booking {
        Booking::new(
            ObjectId::new(),
            ObjectId::new(),
            ObjectId::new().to_hex(),
            parse_booking_date("2025-03-01"),
            parse_booking_date("2025-03-05"),
        )
    }

    #[test]
    fn new_booking_defaults_to_pending_with_a_timestamp() {
        let booking = booking();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.created_at <= Utc::now());
    }

    #[test]
    fn status_parses_the_four_literals_and_nothing_else() {
        assert_eq!(BookingStatus::parse("pending"), Some(BookingStatus::Pending));
        assert_eq!(BookingStatus::parse("confirmed"), Some(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::parse("completed"), Some(BookingStatus::Completed));
        assert_eq!(BookingStatus::parse("cancelled"), Some(BookingStatus::Cancelled));

        assert_eq!(BookingStatus::parse("archived"), None);
        assert_eq!(BookingStatus::parse("Pending"), None);
        assert_eq!(BookingStatus::parse(""), None);
    }

    #[test]
    fn status_serializes_as_lowercase_literals() {
        let json = serde_json::to_value(booking()).unwrap();
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn end_before_start_is_accepted() {
        let booking = Booking::new(
            ObjectId::new(),
            ObjectId::new(),
            "p1".to_string(),
            parse_booking_date("2025-04-01"),
            parse_booking_date("2025-03-01"),
        );
        assert!(booking.end_date.unwrap() < booking.start_date.unwrap());
    }

    #[test]
    fn dates_parse_from_plain_and_rfc3339_forms() {
        assert!(parse_booking_date("2025-03-01").is_some());
        assert!(parse_booking_date("2025-03-01T10:30:00Z").is_some());
        assert!(parse_booking_date("march first").is_none());
        assert!(parse_booking_date("").is_none());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(booking()).unwrap();
        assert!(json.get("ownerId").is_some());
        assert!(json.get("petId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("owner_id").is_none());
    }
}
