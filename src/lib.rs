//! Cabin Booking Library
//!
//! This module exposes the booking-flow components for use by the binary,
//! tests and other consumers.

pub mod config;
pub mod database;
pub mod error;
pub mod form;
pub mod models;
pub mod pricing;
pub mod repositories;
pub mod services;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use database::Database;
use std::sync::Arc;
use store::PgRecordStore;

/// Application state wiring the pool to the record store
pub struct AppState {
    pub database: Database,
    store: Arc<PgRecordStore>,
}

impl AppState {
    /// Create a new AppState over a connection pool
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self {
            database: Database::new(pool.clone()),
            store: Arc::new(PgRecordStore::new(pool)),
        }
    }

    /// The record store as the trait object the booking flow consumes
    pub fn record_store(&self) -> Arc<dyn store::RecordStore> {
        self.store.clone()
    }
}
