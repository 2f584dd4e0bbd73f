use crate::error::{AppError, AppResult};
use crate::models::{Booking, BookingDraft, BookingStatus, Cabin, NewBooking, NewGuest};
use crate::pricing;
use crate::store::RecordStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Two-step submission pipeline: create the guest record, then create the
/// booking record referencing it.
///
/// The writes are strictly sequential; the booking insert never starts
/// before the guest insert has returned an id. The backend offers no atomic
/// create-guest-and-booking operation, so a failed booking insert is
/// compensated by deleting the guest created in the same attempt.
pub struct SubmissionService {
    store: Arc<dyn RecordStore>,
}

impl SubmissionService {
    /// Create a new SubmissionService
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Submit a draft against the record store.
    ///
    /// `cabin` must be the catalog entry matching `draft.cabin_id`; the
    /// caller resolves it so a missing catalog blocks submission before any
    /// write happens.
    pub async fn submit(&self, draft: &BookingDraft, cabin: &Cabin) -> AppResult<Booking> {
        let start = draft
            .start_date
            .ok_or_else(|| AppError::Validation("Check-in date is required".to_string()))?;
        let end = draft
            .end_date
            .ok_or_else(|| AppError::Validation("Check-out date is required".to_string()))?;

        let quote = pricing::quote(cabin, start, end, draft.num_guests, draft.has_breakfast)?;

        // Step 1: create the guest. On failure, abort before any booking
        // write is attempted.
        let guest = self
            .store
            .create_guest(&NewGuest {
                full_name: draft.full_name.clone(),
                email: draft.email.clone(),
            })
            .await?;

        info!("created guest {} for {}", guest.id, guest.email);

        let observations = if draft.observations.trim().is_empty() {
            None
        } else {
            Some(draft.observations.clone())
        };

        let new_booking = NewBooking {
            start_date: start,
            end_date: end,
            num_nights: quote.num_nights,
            num_guests: draft.num_guests,
            cabin_price: quote.cabin_price,
            extras_price: quote.extras_price,
            total_price: quote.total_price,
            status: BookingStatus::Unconfirmed,
            has_breakfast: draft.has_breakfast,
            is_paid: false,
            observations,
            cabin_id: cabin.id,
            guest_id: guest.id,
        };

        // Step 2: create the booking referencing the new guest.
        match self.store.create_booking(&new_booking).await {
            Ok(booking) => {
                info!(
                    "created booking {} for guest {} ({} nights, total {})",
                    booking.id, guest.id, booking.num_nights, booking.total_price
                );
                Ok(booking)
            }
            Err(e) => {
                warn!(
                    "booking insert failed, rolling back guest {}: {}",
                    guest.id, e
                );
                if let Err(rollback) = self.store.delete_guest(guest.id).await {
                    warn!("could not roll back guest {}: {}", guest.id, rollback);
                }
                Err(e)
            }
        }
    }
}
