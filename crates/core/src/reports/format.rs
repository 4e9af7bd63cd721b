//! Display helpers for the revenue dashboard.

use rust_decimal::{Decimal, RoundingStrategy};

fn fixed(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

/// Formats a money amount with two decimal places: `$1250.00`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("${}", fixed(amount, 2))
}

/// Formats a money amount rounded to whole units: `$620`.
#[must_use]
pub fn format_whole_amount(amount: Decimal) -> String {
    format!("${}", fixed(amount, 0))
}

/// Formats a percentage with one decimal place, rounding half up: `33.3%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 1))
}
