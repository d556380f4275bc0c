//! Rental length and price estimates shown in the admin backend.

use crate::types::Timestamp;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Number of rental days between pickup and return, rounded up.
///
/// Any started day counts as a full day. Returns `None` when either date is
/// missing or the return is not after the pickup.
pub fn rental_days(pickup: Option<Timestamp>, return_date: Option<Timestamp>) -> Option<i64> {
    let (pickup, return_date) = (pickup?, return_date?);
    let secs = (return_date - pickup).num_seconds();
    if secs <= 0 {
        return None;
    }
    // Ceiling division for a positive numerator.
    Some((secs + SECS_PER_DAY - 1) / SECS_PER_DAY)
}

/// Estimated total for a rental of `days` at `price_per_day`, saturating at
/// the `i64` bounds.
pub fn estimate_total(days: i64, price_per_day: i32) -> i64 {
    days.saturating_mul(i64::from(price_per_day))
}

/// Estimate for a lead, when both a day count and a car price are known.
pub fn estimate_for(
    pickup: Option<Timestamp>,
    return_date: Option<Timestamp>,
    price_per_day: Option<i32>,
) -> Option<i64> {
    let days = rental_days(pickup, return_date)?;
    Some(estimate_total(days, price_per_day?))
}
