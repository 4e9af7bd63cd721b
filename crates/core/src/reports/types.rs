//! Report data types.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue and occupancy snapshot, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    /// Report type identifier.
    pub report_type: String,
    /// Moment "today" and "this month" were evaluated at.
    pub as_of: NaiveDateTime,
    /// Currency code.
    pub currency: String,
    /// Sum of every transaction amount.
    pub total_revenue: Decimal,
    /// Transactions in the calendar month of `as_of`.
    pub monthly_revenue: Decimal,
    /// Transactions on the date of `as_of`.
    pub daily_revenue: Decimal,
    /// Occupied rooms as a percentage of all rooms.
    pub occupancy_rate: Decimal,
    /// Number of bookings, cancelled ones included.
    pub total_bookings: usize,
    /// Number of cancelled bookings.
    pub cancelled_bookings: usize,
    /// `total_revenue` divided by `total_bookings`.
    pub average_booking_value: Decimal,
    /// Booked amounts summed per room type.
    pub revenue_by_room_type: BTreeMap<String, Decimal>,
}

impl FinancialReport {
    /// Each room type's revenue as a percentage of `total_revenue`.
    ///
    /// Room type revenue comes from bookings and the total from
    /// transactions, so shares need not add up to 100.
    #[must_use]
    pub fn room_type_shares(&self) -> Vec<RoomTypeShare> {
        self.revenue_by_room_type
            .iter()
            .map(|(room_type, revenue)| RoomTypeShare {
                room_type: room_type.clone(),
                revenue: *revenue,
                share: percentage(*revenue, self.total_revenue),
            })
            .collect()
    }
}

/// One row of the revenue-by-room-type breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeShare {
    /// Room type name.
    pub room_type: String,
    /// Booked revenue for the type.
    pub revenue: Decimal,
    /// Percentage of total revenue.
    pub share: Decimal,
}

/// Period chips on the revenue dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// Same calendar date.
    Today,
    /// Same ISO week.
    ThisWeek,
    /// Same calendar month and year.
    #[default]
    ThisMonth,
    /// Same calendar year.
    ThisYear,
}

impl ReportPeriod {
    /// Every period, in chip order.
    pub const ALL: [Self; 4] = [Self::Today, Self::ThisWeek, Self::ThisMonth, Self::ThisYear];

    /// Chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::ThisYear => "This Year",
        }
    }

    /// Returns true if `at` falls in the period that contains `as_of`.
    #[must_use]
    pub fn contains(self, at: NaiveDateTime, as_of: NaiveDateTime) -> bool {
        let (at, as_of) = (at.date(), as_of.date());
        match self {
            Self::Today => at == as_of,
            Self::ThisWeek => at.iso_week() == as_of.iso_week(),
            Self::ThisMonth => at.year() == as_of.year() && at.month() == as_of.month(),
            Self::ThisYear => at.year() == as_of.year(),
        }
    }
}

/// `part / whole * 100`, or zero when `whole` is zero. Saturates instead
/// of overflowing.
pub(crate) fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole).map_or(
        if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        },
        |ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED),
    )
}
