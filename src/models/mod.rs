//! Domain models for the cabin booking core.
//!
//! This module contains the database-backed entities (cabins, guests,
//! bookings) plus the transient, client-held booking draft.

pub mod booking;
pub mod cabin;
pub mod draft;
pub mod guest;

// Re-export all models for convenient access
pub use booking::{Booking, BookingStatus, NewBooking};
pub use cabin::Cabin;
pub use draft::BookingDraft;
pub use guest::{Guest, NewGuest};
