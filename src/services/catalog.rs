use crate::models::Cabin;
use crate::store::RecordStore;
use std::sync::Arc;
use tracing::{debug, error};

/// One-shot loader for the bookable-cabin catalog.
///
/// Fetch failures are logged and degrade the catalog to empty: the form
/// stays usable, but the cabin selector has no options and submission is
/// blocked until a reload succeeds.
pub struct CatalogService {
    store: Arc<dyn RecordStore>,
}

impl CatalogService {
    /// Create a new CatalogService
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetch all cabins, newest first. Non-fatal on failure.
    pub async fn load(&self) -> Vec<Cabin> {
        match self.store.list_cabins().await {
            Ok(cabins) => {
                debug!("loaded {} cabins into the catalog", cabins.len());
                cabins
            }
            Err(e) => {
                error!("Error fetching cabins: {}", e);
                Vec::new()
            }
        }
    }
}
