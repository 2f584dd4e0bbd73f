use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cabin model as projected for the booking catalog.
///
/// A read-only snapshot fetched once per form mount; never mutated by the
/// booking flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Cabin {
    pub id: Uuid,
    pub name: String,
    pub regular_price: Decimal, // NUMERIC(10, 2) in database
    pub discount: Option<Decimal>,
}

impl Cabin {
    /// Nightly price after the discount is applied (discount defaults to 0)
    pub fn effective_nightly_price(&self) -> Decimal {
        self.regular_price - self.discount.unwrap_or(Decimal::ZERO)
    }
}
