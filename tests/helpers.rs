//! Shared test fixtures: an in-memory record store with failure injection,
//! plus draft and cabin builders.

#![allow(dead_code)]

use async_trait::async_trait;
use cabin_booking::error::{AppError, AppResult};
use cabin_booking::models::{Booking, BookingDraft, Cabin, Guest, NewBooking, NewGuest};
use cabin_booking::store::RecordStore;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory stand-in for the hosted record store.
///
/// Each write can be made to fail on demand so tests can drive the
/// submission pipeline through its error paths.
#[derive(Default)]
pub struct MemoryRecordStore {
    pub cabins: Mutex<Vec<Cabin>>,
    pub guests: Mutex<Vec<Guest>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub fail_catalog: AtomicBool,
    pub fail_guest: AtomicBool,
    pub fail_booking: AtomicBool,
    pub fail_delete: AtomicBool,
    pub booking_attempts: AtomicUsize,
    pub delete_attempts: AtomicUsize,
}

impl MemoryRecordStore {
    pub fn with_cabins(cabins: Vec<Cabin>) -> Self {
        Self {
            cabins: Mutex::new(cabins),
            ..Self::default()
        }
    }

    pub fn guest_count(&self) -> usize {
        self.guests.lock().unwrap().len()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list_cabins(&self) -> AppResult<Vec<Cabin>> {
        if self.fail_catalog.load(Ordering::SeqCst) {
            return Err(AppError::Backend("catalog unavailable".to_string()));
        }
        Ok(self.cabins.lock().unwrap().clone())
    }

    async fn create_guest(&self, guest: &NewGuest) -> AppResult<Guest> {
        if self.fail_guest.load(Ordering::SeqCst) {
            return Err(AppError::Backend("guest insert rejected".to_string()));
        }
        let stored = Guest {
            id: Uuid::new_v4(),
            full_name: guest.full_name.clone(),
            email: guest.email.clone(),
            created_at: Utc::now().naive_utc(),
        };
        self.guests.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn create_booking(&self, booking: &NewBooking) -> AppResult<Booking> {
        self.booking_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_booking.load(Ordering::SeqCst) {
            return Err(AppError::Backend("booking insert rejected".to_string()));
        }
        // The ordering invariant: the referenced guest must already exist.
        let guests = self.guests.lock().unwrap();
        if !guests.iter().any(|g| g.id == booking.guest_id) {
            return Err(AppError::NotFound(format!(
                "guest {} does not exist",
                booking.guest_id
            )));
        }
        drop(guests);

        let stored = Booking {
            id: Uuid::new_v4(),
            start_date: booking.start_date,
            end_date: booking.end_date,
            num_nights: booking.num_nights,
            num_guests: booking.num_guests,
            cabin_price: booking.cabin_price,
            extras_price: booking.extras_price,
            total_price: booking.total_price,
            status: booking.status.as_str().to_string(),
            has_breakfast: booking.has_breakfast,
            is_paid: booking.is_paid,
            observations: booking.observations.clone(),
            cabin_id: booking.cabin_id,
            guest_id: booking.guest_id,
            created_at: Utc::now().naive_utc(),
        };
        self.bookings.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete_guest(&self, id: Uuid) -> AppResult<()> {
        self.delete_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(AppError::Backend("guest delete rejected".to_string()));
        }
        self.guests.lock().unwrap().retain(|g| g.id != id);
        Ok(())
    }
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Cabin 001: 100 per night with a 10 discount
pub fn sample_cabin() -> Cabin {
    Cabin {
        id: Uuid::new_v4(),
        name: "001".to_string(),
        regular_price: Decimal::from(100),
        discount: Some(Decimal::from(10)),
    }
}

/// A fully filled draft for a 3-night stay in the given cabin
pub fn filled_draft(cabin_id: Uuid) -> BookingDraft {
    BookingDraft {
        full_name: "Nina Williams".to_string(),
        email: "nina@example.com".to_string(),
        start_date: Some(date("2030-06-01")),
        end_date: Some(date("2030-06-04")),
        cabin_id: Some(cabin_id),
        num_guests: 2,
        has_breakfast: true,
        observations: "Vegetarian breakfast, please".to_string(),
    }
}

/// The validation "today" used with the 2030 fixtures
pub fn today() -> NaiveDate {
    date("2030-05-01")
}
