//! Report generation service.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{FinancialReport, ReportPeriod, percentage};
use crate::resort::{Booking, BookingStatus, ResortData, RoomStatus, Transaction};

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates the revenue dashboard report.
    ///
    /// `as_of` anchors the daily and monthly figures; pass `clock.now()`.
    /// Revenue totals sum transactions while booking counts and the
    /// room-type breakdown read bookings. Sums saturate at the `Decimal`
    /// range, so the report never panics.
    #[must_use]
    pub fn generate_financial_report(data: &ResortData, as_of: NaiveDateTime) -> FinancialReport {
        let total_revenue = saturating_sum(data.transactions.iter().map(|t| t.amount));
        let total_bookings = data.bookings.len();
        let cancelled_bookings = data
            .bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Cancelled)
            .count();
        let occupied = data
            .rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Occupied)
            .count();

        let average_booking_value = if total_bookings == 0 {
            Decimal::ZERO
        } else {
            total_revenue / Decimal::from(total_bookings)
        };

        let report = FinancialReport {
            report_type: "financial_summary".to_string(),
            as_of,
            currency: "USD".to_string(),
            total_revenue,
            monthly_revenue: Self::revenue_in_period(
                &data.transactions,
                ReportPeriod::ThisMonth,
                as_of,
            ),
            daily_revenue: Self::revenue_in_period(&data.transactions, ReportPeriod::Today, as_of),
            occupancy_rate: percentage(Decimal::from(occupied), Decimal::from(data.rooms.len())),
            total_bookings,
            cancelled_bookings,
            average_booking_value,
            revenue_by_room_type: Self::revenue_by_room_type(&data.bookings),
        };

        debug!(
            total_revenue = %report.total_revenue,
            occupancy_rate = %report.occupancy_rate,
            total_bookings,
            "Financial report generated"
        );
        report
    }

    /// Sums transactions whose timestamp falls in `period` around `as_of`.
    #[must_use]
    pub fn revenue_in_period(
        transactions: &[Transaction],
        period: ReportPeriod,
        as_of: NaiveDateTime,
    ) -> Decimal {
        saturating_sum(
            transactions
                .iter()
                .filter(|t| period.contains(t.timestamp, as_of))
                .map(|t| t.amount),
        )
    }

    /// Groups bookings by room type and sums their booked amounts.
    #[must_use]
    pub fn revenue_by_room_type(bookings: &[Booking]) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for booking in bookings {
            let total = totals
                .entry(booking.room_type.clone())
                .or_insert(Decimal::ZERO);
            *total = total.saturating_add(booking.total_amount);
        }
        totals
    }
}

/// Sums amounts, clamping at the `Decimal` range instead of overflowing.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}
