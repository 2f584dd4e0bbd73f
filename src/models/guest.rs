use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Guest model representing a registered guest
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Insert payload for a new guest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGuest {
    pub full_name: String,
    pub email: String,
}
