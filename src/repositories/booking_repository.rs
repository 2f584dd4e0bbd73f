use crate::models::{Booking, NewBooking};
use sqlx::{PgPool, Result as SqlxResult};
use uuid::Uuid;

/// Repository for booking data access
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new BookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new booking, returning the stored row
    pub async fn create(&self, booking: &NewBooking) -> SqlxResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                start_date, end_date, num_nights, num_guests,
                cabin_price, extras_price, total_price, status,
                has_breakfast, is_paid, observations, cabin_id, guest_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING
                id, start_date, end_date, num_nights, num_guests,
                cabin_price, extras_price, total_price, status,
                has_breakfast, is_paid, observations, cabin_id, guest_id,
                created_at
            "#,
        )
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.num_nights)
        .bind(booking.num_guests)
        .bind(booking.cabin_price)
        .bind(booking.extras_price)
        .bind(booking.total_price)
        .bind(booking.status.as_str())
        .bind(booking.has_breakfast)
        .bind(booking.is_paid)
        .bind(&booking.observations)
        .bind(booking.cabin_id)
        .bind(booking.guest_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a booking by UUID
    pub async fn find_by_id(&self, id: Uuid) -> SqlxResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT
                id, start_date, end_date, num_nights, num_guests,
                cabin_price, extras_price, total_price, status,
                has_breakfast, is_paid, observations, cabin_id, guest_id,
                created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
