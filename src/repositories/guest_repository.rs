use crate::models::{Guest, NewGuest};
use sqlx::{PgPool, Result as SqlxResult};
use uuid::Uuid;

/// Repository for guest data access
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    /// Create a new GuestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new guest, returning the stored row with its assigned id
    pub async fn create(&self, guest: &NewGuest) -> SqlxResult<Guest> {
        sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests (full_name, email)
            VALUES ($1, $2)
            RETURNING id, full_name, email, created_at
            "#,
        )
        .bind(&guest.full_name)
        .bind(&guest.email)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a guest by UUID
    pub async fn find_by_id(&self, id: Uuid) -> SqlxResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>(
            r#"
            SELECT id, full_name, email, created_at
            FROM guests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a guest row (used to compensate an orphaned guest after a
    /// failed booking insert)
    pub async fn delete(&self, id: Uuid) -> SqlxResult<()> {
        sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
