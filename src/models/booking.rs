use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Unconfirmed,
    CheckedIn,
    CheckedOut,
}

impl BookingStatus {
    /// Convert from database string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "unconfirmed" => Ok(BookingStatus::Unconfirmed),
            "checked-in" => Ok(BookingStatus::CheckedIn),
            "checked-out" => Ok(BookingStatus::CheckedOut),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }

    /// Convert to database string
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Unconfirmed => "unconfirmed",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or(BookingStatus::Unconfirmed)
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Booking model representing a confirmed reservation row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: Decimal,  // room share of the total
    pub extras_price: Decimal, // breakfast share of the total
    pub total_price: Decimal,
    pub status: String, // Stored as TEXT, use BookingStatus enum for type safety
    pub has_breakfast: bool,
    pub is_paid: bool,
    pub observations: Option<String>,
    pub cabin_id: Uuid,
    pub guest_id: Uuid,
    pub created_at: NaiveDateTime,
}

/// Insert payload for a new booking.
///
/// Carries everything the bookings table needs except the generated id and
/// timestamp. New bookings always start unconfirmed and unpaid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: Decimal,
    pub extras_price: Decimal,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub has_breakfast: bool,
    pub is_paid: bool,
    pub observations: Option<String>,
    pub cabin_id: Uuid,
    pub guest_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_conversion() {
        assert_eq!(BookingStatus::Unconfirmed.as_str(), "unconfirmed");
        assert_eq!(BookingStatus::CheckedIn.as_str(), "checked-in");
        assert_eq!(BookingStatus::CheckedOut.as_str(), "checked-out");

        assert_eq!(
            BookingStatus::from_str("unconfirmed"),
            Ok(BookingStatus::Unconfirmed)
        );
        assert!(BookingStatus::from_str("cancelled").is_err());
    }
}
