//! Cabin Booking Service
//!
//! Entry point for the reservation flow: connects to the record store,
//! mounts the booking form (one-shot catalog fetch) and, when a JSON draft
//! file is passed as the first argument, submits it through the two-step
//! pipeline.

use cabin_booking::config::AppConfig;
use cabin_booking::database::{create_pool, run_migrations};
use cabin_booking::error::{AppError, AppResult};
use cabin_booking::form::{BookingForm, FormPhase};
use cabin_booking::models::BookingDraft;
use cabin_booking::AppState;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("cabin_booking={},sqlx=warn", config.log_level).into()
            }),
        )
        .init();

    info!("Cabin booking service starting");
    info!("Environment: {}", config.environment);
    info!("Log level: {}", config.log_level);

    // =========================================================================
    // DATABASE SETUP
    // =========================================================================
    info!("Connecting to database...");

    let pool = create_pool(&config.database).await.map_err(|e| {
        error!("Failed to create database pool: {}", e);
        AppError::Database(e)
    })?;

    info!("Database connection pool created successfully");

    info!("Running database migrations...");
    run_migrations(&pool, None).await.map_err(|e| {
        error!("Database migration failed: {}", e);
        AppError::Database(e)
    })?;

    info!("Database migrations completed successfully");

    // =========================================================================
    // BOOKING FORM
    // =========================================================================
    let state = AppState::new(pool);

    let mut form = BookingForm::mount(state.record_store()).await;
    info!("✓ Booking form mounted ({} cabins in catalog)", form.catalog().len());

    // Optional: submit a draft read from a JSON file
    if let Some(path) = std::env::args().nth(1) {
        info!("Submitting booking draft from {}", path);

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| AppError::Message(format!("Could not read {}: {}", path, e)))?;
        let draft: BookingDraft = serde_json::from_str(&raw)?;

        form.apply(draft);
        if let Some(total) = form.total_price() {
            info!("Computed total price: {}", total);
        }

        form.submit().await;

        match form.phase() {
            FormPhase::Success { .. } => info!("Booking created successfully!"),
            FormPhase::Error(msg) => warn!("Submission failed: {}", msg),
            _ => {}
        }
    }

    info!("Cabin booking service done");
    Ok(())
}
