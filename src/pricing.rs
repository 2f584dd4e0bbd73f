//! Nightly-price arithmetic for the reservation form.
//!
//! A pure function of (cabin, date range, guest count, breakfast flag).
//! The form controller invokes it explicitly after every relevant field
//! mutation; there is no reactive dependency tracking.

use crate::error::{AppError, AppResult};
use crate::models::Cabin;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat breakfast rate, in currency units per guest per night
pub const BREAKFAST_RATE: i64 = 15;

/// Computed price breakdown for a stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub num_nights: i32,
    pub cabin_price: Decimal,
    pub extras_price: Decimal,
    pub total_price: Decimal,
}

/// Whole calendar days between check-in and check-out (no time-of-day
/// component)
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Compute the price breakdown for a stay.
///
/// `cabin_price = (regular_price - discount) * nights`, discount defaulting
/// to 0 when absent. `extras_price = 15 * nights * guests` when breakfast is
/// included, otherwise 0. Rejects non-positive night counts and guest counts
/// rather than producing a negative price.
pub fn quote(
    cabin: &Cabin,
    start: NaiveDate,
    end: NaiveDate,
    num_guests: i32,
    has_breakfast: bool,
) -> AppResult<Quote> {
    let nights = nights_between(start, end);
    if nights < 1 {
        return Err(AppError::Validation(format!(
            "Stay must be at least one night (check-in {}, check-out {})",
            start, end
        )));
    }
    if num_guests < 1 {
        return Err(AppError::Validation(
            "Number of guests must be at least 1".to_string(),
        ));
    }

    let num_nights = i32::try_from(nights)
        .map_err(|_| AppError::Validation(format!("Stay of {} nights is too long", nights)))?;

    let nights_dec = Decimal::from(num_nights);
    let cabin_price = cabin.effective_nightly_price() * nights_dec;
    let extras_price = if has_breakfast {
        Decimal::from(BREAKFAST_RATE) * nights_dec * Decimal::from(num_guests)
    } else {
        Decimal::ZERO
    };

    Ok(Quote {
        num_nights,
        cabin_price,
        extras_price,
        total_price: cabin_price + extras_price,
    })
}
