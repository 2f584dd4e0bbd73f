use crate::error::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest party size the reservation form accepts
pub const MAX_GUESTS: i32 = 10;

/// The in-progress, unsaved booking form state.
///
/// Created empty on mount, mutated field-by-field on user input, and reset
/// to empty after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub full_name: String,
    pub email: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub cabin_id: Option<Uuid>,
    pub num_guests: i32,
    pub has_breakfast: bool,
    pub observations: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            start_date: None,
            end_date: None,
            cabin_id: None,
            num_guests: 1,
            has_breakfast: false,
            observations: String::new(),
        }
    }
}

impl BookingDraft {
    /// Validate the draft against the same rules the reservation form
    /// enforces: required fields, a plausible email, dates not before
    /// `today`, check-out strictly after check-in, party size in range.
    pub fn validate(&self, today: NaiveDate) -> AppResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(AppError::Validation("Full name is required".to_string()));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }
        if !email.contains('@') {
            return Err(AppError::Validation(format!("Invalid email: {}", email)));
        }

        if self.cabin_id.is_none() {
            return Err(AppError::Validation("A cabin must be selected".to_string()));
        }

        let start = self
            .start_date
            .ok_or_else(|| AppError::Validation("Check-in date is required".to_string()))?;
        let end = self
            .end_date
            .ok_or_else(|| AppError::Validation("Check-out date is required".to_string()))?;

        if start < today {
            return Err(AppError::Validation(format!(
                "Check-in date {} is in the past",
                start
            )));
        }
        if end <= start {
            return Err(AppError::Validation(
                "Check-out date must be after the check-in date".to_string(),
            ));
        }

        if self.num_guests < 1 || self.num_guests > MAX_GUESTS {
            return Err(AppError::Validation(format!(
                "Number of guests must be between 1 and {}",
                MAX_GUESTS
            )));
        }

        Ok(())
    }

    /// Whole nights between check-in and check-out, when both dates are set
    pub fn nights(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn filled() -> BookingDraft {
        BookingDraft {
            full_name: "Jonas Schmedtmann".to_string(),
            email: "jonas@example.com".to_string(),
            start_date: Some(date("2024-06-01")),
            end_date: Some(date("2024-06-04")),
            cabin_id: Some(Uuid::new_v4()),
            num_guests: 2,
            has_breakfast: true,
            observations: "Late arrival".to_string(),
        }
    }

    #[test]
    fn test_filled_draft_is_valid() {
        assert!(filled().validate(date("2024-05-01")).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut draft = filled();
        draft.full_name = "  ".to_string();
        assert!(draft.validate(date("2024-05-01")).is_err());
    }

    #[test]
    fn test_email_without_at_rejected() {
        let mut draft = filled();
        draft.email = "jonas.example.com".to_string();
        assert!(draft.validate(date("2024-05-01")).is_err());
    }

    #[test]
    fn test_past_check_in_rejected() {
        let draft = filled();
        assert!(draft.validate(date("2024-07-01")).is_err());
    }

    #[test]
    fn test_check_out_not_after_check_in_rejected() {
        let mut draft = filled();
        draft.end_date = draft.start_date;
        assert!(draft.validate(date("2024-05-01")).is_err());
    }

    #[test]
    fn test_guest_count_bounds() {
        let mut draft = filled();
        draft.num_guests = 0;
        assert!(draft.validate(date("2024-05-01")).is_err());
        draft.num_guests = MAX_GUESTS + 1;
        assert!(draft.validate(date("2024-05-01")).is_err());
        draft.num_guests = MAX_GUESTS;
        assert!(draft.validate(date("2024-05-01")).is_ok());
    }

    #[test]
    fn test_nights() {
        let draft = filled();
        assert_eq!(draft.nights(), Some(3));
        assert_eq!(BookingDraft::default().nights(), None);
    }
}
