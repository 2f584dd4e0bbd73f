use crate::models::Cabin;
use sqlx::{PgPool, Result as SqlxResult};

/// Repository for cabin data access
pub struct CabinRepository {
    pool: PgPool,
}

impl CabinRepository {
    /// Create a new CabinRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all cabins projected for the booking catalog, newest first
    pub async fn list_catalog(&self) -> SqlxResult<Vec<Cabin>> {
        sqlx::query_as::<_, Cabin>(
            r#"
            SELECT id, name, regular_price, discount
            FROM cabins
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
