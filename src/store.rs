//! The record-store seam over the hosted backend.
//!
//! The booking flow treats the backend as an opaque record store with three
//! logical operations (list cabins, insert guest, insert booking) plus a
//! guest delete used only to compensate a failed booking insert. Production
//! code goes through [`PgRecordStore`]; tests supply their own
//! implementation with failure injection.

use crate::error::{AppResult, RepositoryError};
use crate::models::{Booking, Cabin, Guest, NewBooking, NewGuest};
use crate::repositories::{BookingRepository, CabinRepository, GuestRepository};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Backend collaborator operations used by the booking flow
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List all bookable cabins, ordered by creation time descending
    async fn list_cabins(&self) -> AppResult<Vec<Cabin>>;

    /// Insert a guest record; the returned id is required before a booking
    /// may reference it
    async fn create_guest(&self, guest: &NewGuest) -> AppResult<Guest>;

    /// Insert a booking record referencing an existing guest
    async fn create_booking(&self, booking: &NewBooking) -> AppResult<Booking>;

    /// Delete a guest record (saga compensation)
    async fn delete_guest(&self, id: Uuid) -> AppResult<()>;
}

/// PostgreSQL-backed record store delegating to the sqlx repositories
pub struct PgRecordStore {
    cabin_repo: CabinRepository,
    guest_repo: GuestRepository,
    booking_repo: BookingRepository,
}

impl PgRecordStore {
    /// Create a new PgRecordStore over a connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            cabin_repo: CabinRepository::new(pool.clone()),
            guest_repo: GuestRepository::new(pool.clone()),
            booking_repo: BookingRepository::new(pool),
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn list_cabins(&self) -> AppResult<Vec<Cabin>> {
        self.cabin_repo
            .list_catalog()
            .await
            .map_err(|e| RepositoryError::from(e).into())
    }

    async fn create_guest(&self, guest: &NewGuest) -> AppResult<Guest> {
        self.guest_repo
            .create(guest)
            .await
            .map_err(|e| RepositoryError::from(e).into())
    }

    async fn create_booking(&self, booking: &NewBooking) -> AppResult<Booking> {
        self.booking_repo
            .create(booking)
            .await
            .map_err(|e| RepositoryError::from(e).into())
    }

    async fn delete_guest(&self, id: Uuid) -> AppResult<()> {
        self.guest_repo
            .delete(id)
            .await
            .map_err(|e| RepositoryError::from(e).into())
    }
}
