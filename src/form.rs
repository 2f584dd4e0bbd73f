//! Booking form controller.
//!
//! Owns the draft, the one-shot cabin catalog, the latest price quote and
//! the form-session state machine. Price recalculation is a plain function
//! call made after every relevant field mutation.

use crate::models::{BookingDraft, Cabin};
use crate::pricing::{self, Quote};
use crate::services::{CatalogService, SubmissionService};
use crate::store::RecordStore;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long the transient success notice stays visible
pub const SUCCESS_DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// Form-session state machine
#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    /// Fields mutable, total price live-updated
    Editing,
    /// Both writes in flight; input is ignored by policy
    Submitting,
    /// Both writes succeeded; auto-reverts to Editing after the display
    /// window
    Success { shown_at: Instant },
    /// Validation or a write failed; the message is surfaced verbatim and
    /// the fields are preserved for resubmission
    Error(String),
}

/// Controller for one reservation-form session
pub struct BookingForm {
    catalog_service: CatalogService,
    submission: SubmissionService,
    catalog: Vec<Cabin>,
    draft: BookingDraft,
    quote: Option<Quote>,
    phase: FormPhase,
}

impl BookingForm {
    /// Mount the form: perform the one-time catalog fetch and start an
    /// empty draft in the Editing phase
    pub async fn mount(store: Arc<dyn RecordStore>) -> Self {
        let catalog_service = CatalogService::new(store.clone());
        let submission = SubmissionService::new(store);
        let catalog = catalog_service.load().await;

        Self {
            catalog_service,
            submission,
            catalog,
            draft: BookingDraft::default(),
            quote: None,
            phase: FormPhase::Editing,
        }
    }

    /// Re-run the one-shot catalog fetch and recalculate, since cabin price
    /// data may have just become available
    pub async fn reload_catalog(&mut self) {
        self.catalog = self.catalog_service.load().await;
        self.recalculate();
    }

    fn editable(&self) -> bool {
        !matches!(self.phase, FormPhase::Submitting)
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        if self.editable() {
            self.draft.full_name = full_name.into();
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.editable() {
            self.draft.email = email.into();
        }
    }

    pub fn set_observations(&mut self, observations: impl Into<String>) {
        if self.editable() {
            self.draft.observations = observations.into();
        }
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        if self.editable() {
            self.draft.start_date = Some(date);
            self.recalculate();
        }
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        if self.editable() {
            self.draft.end_date = Some(date);
            self.recalculate();
        }
    }

    pub fn select_cabin(&mut self, cabin_id: Uuid) {
        if self.editable() {
            self.draft.cabin_id = Some(cabin_id);
            self.recalculate();
        }
    }

    pub fn set_num_guests(&mut self, num_guests: i32) {
        if self.editable() {
            self.draft.num_guests = num_guests;
            self.recalculate();
        }
    }

    pub fn set_breakfast(&mut self, has_breakfast: bool) {
        if self.editable() {
            self.draft.has_breakfast = has_breakfast;
            self.recalculate();
        }
    }

    /// Prefill the whole draft (e.g. from a JSON file) and recalculate
    pub fn apply(&mut self, draft: BookingDraft) {
        if self.editable() {
            self.draft = draft;
            self.recalculate();
        }
    }

    /// Recompute the price quote from the current draft.
    ///
    /// No computation occurs while cabin, check-in or check-out is missing,
    /// or while the selected cabin cannot be resolved against the catalog;
    /// the previous total is retained in those cases.
    fn recalculate(&mut self) {
        let (Some(cabin_id), Some(start), Some(end)) =
            (self.draft.cabin_id, self.draft.start_date, self.draft.end_date)
        else {
            return;
        };
        let Some(cabin) = self.catalog.iter().find(|c| c.id == cabin_id) else {
            return;
        };

        if let Ok(quote) = pricing::quote(
            cabin,
            start,
            end,
            self.draft.num_guests,
            self.draft.has_breakfast,
        ) {
            self.quote = Some(quote);
        }
    }

    /// Submit the current draft through the two-step pipeline.
    ///
    /// Validation failures and write failures both land in the Error phase
    /// with the message verbatim and the fields untouched; success clears
    /// the draft and enters the transient Success phase.
    pub async fn submit(&mut self) {
        self.submit_at(Utc::now().date_naive()).await
    }

    /// Like [`submit`](Self::submit) with an explicit "today" for the
    /// date-minimum checks
    pub async fn submit_at(&mut self, today: NaiveDate) {
        if matches!(self.phase, FormPhase::Submitting) {
            return;
        }

        if let Err(e) = self.draft.validate(today) {
            self.phase = FormPhase::Error(e.to_string());
            return;
        }

        // cabin_id presence was just validated; resolving it against the
        // catalog blocks submission when the catalog failed to load
        let selected = self.draft.cabin_id.and_then(|id| {
            self.catalog.iter().find(|c| c.id == id).cloned()
        });
        let Some(cabin) = selected else {
            self.phase =
                FormPhase::Error("Selected cabin is not in the catalog".to_string());
            return;
        };

        self.phase = FormPhase::Submitting;

        match self.submission.submit(&self.draft, &cabin).await {
            Ok(_) => {
                self.draft = BookingDraft::default();
                self.quote = None;
                self.phase = FormPhase::Success {
                    shown_at: Instant::now(),
                };
            }
            Err(e) => {
                self.phase = FormPhase::Error(e.to_string());
            }
        }
    }

    /// Advance the transient Success phase: reverts to Editing once the
    /// display window has elapsed
    pub fn poll(&mut self, now: Instant) {
        if let FormPhase::Success { shown_at } = &self.phase {
            if now.duration_since(*shown_at) >= SUCCESS_DISPLAY_WINDOW {
                self.phase = FormPhase::Editing;
            }
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &[Cabin] {
        &self.catalog
    }

    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// Latest computed total, if a quote has ever been produced
    pub fn total_price(&self) -> Option<Decimal> {
        self.quote.as_ref().map(|q| q.total_price)
    }
}
