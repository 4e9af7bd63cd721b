//! Tests for the reports module.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use garuga_shared::types::{BookingId, RoomId, TransactionId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::format::format_percent;
use super::service::ReportService;
use super::types::ReportPeriod;
use crate::resort::{
    Booking, BookingStatus, ResortData, Room, RoomStatus, Transaction, TransactionStatus,
    TransactionType,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn sample_as_of() -> NaiveDateTime {
    at(2024, 2, 20, 18)
}

fn room(i: usize, status: RoomStatus) -> Room {
    Room {
        id: RoomId::new(format!("R{i:03}")),
        number: format!("X{i}"),
        room_type: "Test Room".to_string(),
        floor: 1,
        price_per_night: dec!(100),
        status,
        amenities: Vec::new(),
        max_occupancy: 2,
        last_cleaned: at(2024, 1, 1, 9),
        current_guest: None,
    }
}

fn booking(i: usize, room_type: &str, amount: Decimal, status: BookingStatus) -> Booking {
    Booking {
        id: BookingId::new(format!("B{i:03}")),
        guest_name: format!("Guest {i}"),
        room_type: room_type.to_string(),
        room_number: format!("X{i}"),
        check_in: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        total_amount: amount,
        status,
        guest_count: 1,
        special_requests: String::new(),
        contact_number: String::new(),
        email: format!("guest{i}@example.com"),
    }
}

fn transaction(i: usize, amount: Decimal, timestamp: NaiveDateTime) -> Transaction {
    Transaction {
        id: TransactionId::new(format!("T{i:03}")),
        booking_id: BookingId::new(format!("B{i:03}")),
        guest_name: format!("Guest {i}"),
        amount,
        transaction_type: TransactionType::Payment,
        timestamp,
        payment_method: "Credit Card".to_string(),
        status: TransactionStatus::Completed,
    }
}

fn status_strategy() -> impl Strategy<Value = RoomStatus> {
    prop::sample::select(RoomStatus::ALL.to_vec())
}

fn booking_status_strategy() -> impl Strategy<Value = BookingStatus> {
    prop::sample::select(BookingStatus::ALL.to_vec())
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    /// Property: occupancy is the occupied share of rooms, bounded by 0 and 100
    #[test]
    fn test_occupancy_rate_bounded(
        statuses in prop::collection::vec(status_strategy(), 0..40),
    ) {
        let data = ResortData {
            rooms: statuses.iter().enumerate().map(|(i, s)| room(i, *s)).collect(),
            ..ResortData::default()
        };
        let occupied = statuses.iter().filter(|s| **s == RoomStatus::Occupied).count();

        let report = ReportService::generate_financial_report(&data, sample_as_of());

        prop_assert!(report.occupancy_rate >= Decimal::ZERO);
        prop_assert!(report.occupancy_rate <= Decimal::ONE_HUNDRED);
        if statuses.is_empty() {
            prop_assert_eq!(report.occupancy_rate, Decimal::ZERO);
        }
        if occupied == statuses.len() && !statuses.is_empty() {
            prop_assert_eq!(report.occupancy_rate, Decimal::ONE_HUNDRED);
        }
    }

    /// Property: total revenue sums transactions and ignores bookings
    #[test]
    fn test_total_revenue_sums_transactions(
        payments in prop::collection::vec(amount_strategy(), 0..20),
        booked in prop::collection::vec(amount_strategy(), 0..20),
    ) {
        let data = ResortData {
            bookings: booked
                .iter()
                .enumerate()
                .map(|(i, a)| booking(i, "Suite", *a, BookingStatus::Confirmed))
                .collect(),
            rooms: Vec::new(),
            transactions: payments
                .iter()
                .enumerate()
                .map(|(i, a)| transaction(i, *a, sample_as_of()))
                .collect(),
        };

        let report = ReportService::generate_financial_report(&data, sample_as_of());

        let expected: Decimal = payments.iter().copied().sum();
        prop_assert_eq!(report.total_revenue, expected);
        prop_assert_eq!(report.total_bookings, booked.len());
        if booked.is_empty() {
            prop_assert_eq!(report.average_booking_value, Decimal::ZERO);
        }
    }

    /// Property: room type revenue partitions the booked amounts
    #[test]
    fn test_room_type_revenue_partitions_bookings(
        rows in prop::collection::vec(
            (prop::sample::select(vec!["Grand Suite", "Double Room", "Single Room"]),
             amount_strategy(),
             booking_status_strategy()),
            0..30,
        ),
    ) {
        let bookings: Vec<Booking> = rows
            .iter()
            .enumerate()
            .map(|(i, (room_type, amount, status))| booking(i, room_type, *amount, *status))
            .collect();

        let grouped = ReportService::revenue_by_room_type(&bookings);

        let grouped_total: Decimal = grouped.values().copied().sum();
        let booked_total: Decimal = bookings.iter().map(|b| b.total_amount).sum();
        prop_assert_eq!(grouped_total, booked_total);
        for room_type in grouped.keys() {
            prop_assert!(bookings.iter().any(|b| &b.room_type == room_type));
        }
    }

    /// Property: for non-negative amounts, narrower calendar periods never
    /// report more revenue than the periods containing them
    #[test]
    fn test_period_revenue_is_monotonic(
        offsets in prop::collection::vec((-800i64..800, amount_strategy()), 0..30),
    ) {
        let as_of = sample_as_of();
        let transactions: Vec<Transaction> = offsets
            .iter()
            .enumerate()
            .map(|(i, (hours, amount))| transaction(i, *amount, as_of + TimeDelta::hours(*hours)))
            .collect();

        let revenue = |period| ReportService::revenue_in_period(&transactions, period, as_of);
        let today = revenue(ReportPeriod::Today);

        prop_assert!(today <= revenue(ReportPeriod::ThisWeek));
        prop_assert!(today <= revenue(ReportPeriod::ThisMonth));
        prop_assert!(revenue(ReportPeriod::ThisMonth) <= revenue(ReportPeriod::ThisYear));
    }
}

#[test]
fn test_sample_report_figures() {
    let report = ReportService::generate_financial_report(&ResortData::sample(), sample_as_of());

    assert_eq!(report.report_type, "financial_summary");
    assert_eq!(report.as_of, sample_as_of());
    assert_eq!(report.total_revenue, dec!(3100));
    assert_eq!(report.monthly_revenue, dec!(3100));
    assert_eq!(report.daily_revenue, dec!(1250));
    assert_eq!(report.total_bookings, 5);
    assert_eq!(report.cancelled_bookings, 1);
    assert_eq!(report.average_booking_value, dec!(620));
    assert_eq!(format_percent(report.occupancy_rate), "16.7%");
}

#[test]
fn test_total_revenue_reads_transactions_not_bookings() {
    let data = ResortData::sample();
    let booked: Decimal = data.bookings.iter().map(|b| b.total_amount).sum();

    let report = ReportService::generate_financial_report(&data, sample_as_of());

    assert_eq!(booked, dec!(4375));
    assert_eq!(report.total_revenue, dec!(3100));
    assert_ne!(report.total_revenue, booked);
    // 3100 / 5 bookings, although only 4 bookings have a transaction.
    assert_eq!(report.average_booking_value, dec!(620));
}

#[test]
fn test_two_of_six_rooms_occupied() {
    let mut data = ResortData::sample();
    data.rooms[1].status = RoomStatus::Occupied;

    let report = ReportService::generate_financial_report(&data, sample_as_of());

    assert_eq!(format_percent(report.occupancy_rate), "33.3%");
    assert!(report.occupancy_rate > dec!(33.33));
    assert!(report.occupancy_rate < dec!(33.34));
}

#[test]
fn test_empty_data_reports_zeroes() {
    let report = ReportService::generate_financial_report(&ResortData::default(), sample_as_of());

    assert_eq!(report.total_revenue, Decimal::ZERO);
    assert_eq!(report.occupancy_rate, Decimal::ZERO);
    assert_eq!(report.average_booking_value, Decimal::ZERO);
    assert_eq!(report.total_bookings, 0);
    assert!(report.revenue_by_room_type.is_empty());
    assert!(report.room_type_shares().is_empty());
}

#[test]
fn test_sample_revenue_by_room_type() {
    let report = ReportService::generate_financial_report(&ResortData::sample(), sample_as_of());

    let grouped: Vec<(&str, Decimal)> = report
        .revenue_by_room_type
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(
        grouped,
        [
            ("Double Room", dec!(1000)),
            ("Grand Suite", dec!(3000)),
            ("Single Room", dec!(375)),
        ]
    );
}

#[test]
fn test_room_type_shares_use_total_revenue() {
    let report = ReportService::generate_financial_report(&ResortData::sample(), sample_as_of());

    let shares: Vec<(String, String)> = report
        .room_type_shares()
        .into_iter()
        .map(|s| (s.room_type, format_percent(s.share)))
        .collect();
    assert_eq!(
        shares,
        [
            ("Double Room".to_string(), "32.3%".to_string()),
            ("Grand Suite".to_string(), "96.8%".to_string()),
            ("Single Room".to_string(), "12.1%".to_string()),
        ]
    );
}

#[test]
fn test_sample_revenue_per_period() {
    let data = ResortData::sample();
    let as_of = sample_as_of();
    let revenue = |period| ReportService::revenue_in_period(&data.transactions, period, as_of);

    assert_eq!(revenue(ReportPeriod::Today), dec!(1250));
    // ISO week of Tue 2024-02-20 runs Mon 02-19 to Sun 02-25.
    assert_eq!(revenue(ReportPeriod::ThisWeek), dec!(2125));
    assert_eq!(revenue(ReportPeriod::ThisMonth), dec!(3100));
    assert_eq!(revenue(ReportPeriod::ThisYear), dec!(3100));
}

#[test]
fn test_monthly_revenue_requires_same_year() {
    let report =
        ReportService::generate_financial_report(&ResortData::sample(), at(2025, 2, 20, 18));

    assert_eq!(report.monthly_revenue, Decimal::ZERO);
    assert_eq!(report.daily_revenue, Decimal::ZERO);
    assert_eq!(report.total_revenue, dec!(3100));
}

#[test]
fn test_report_is_idempotent() {
    let data = ResortData::sample();
    let first = ReportService::generate_financial_report(&data, sample_as_of());
    let second = ReportService::generate_financial_report(&data, sample_as_of());
    assert_eq!(first, second);
}

#[test]
fn test_report_serializes_amounts_as_strings() {
    let report = ReportService::generate_financial_report(&ResortData::sample(), sample_as_of());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_revenue"], "3100.00");
    assert_eq!(json["revenue_by_room_type"]["Grand Suite"], "3000.00");
    assert_eq!(json["total_bookings"], 5);
}

#[test]
fn test_period_labels() {
    let labels: Vec<&str> = ReportPeriod::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["Today", "This Week", "This Month", "This Year"]);
    assert_eq!(ReportPeriod::default(), ReportPeriod::ThisMonth);
}

#[test]
fn test_huge_amounts_saturate_instead_of_panicking() {
    let data = ResortData {
        bookings: vec![
            booking(1, "Suite", Decimal::MAX, BookingStatus::Confirmed),
            booking(2, "Suite", Decimal::MAX, BookingStatus::Confirmed),
        ],
        rooms: Vec::new(),
        transactions: vec![
            transaction(1, Decimal::MAX, sample_as_of()),
            transaction(2, Decimal::MAX, sample_as_of()),
        ],
    };

    let report = ReportService::generate_financial_report(&data, sample_as_of());

    assert_eq!(report.total_revenue, Decimal::MAX);
    assert_eq!(report.daily_revenue, Decimal::MAX);
    assert_eq!(report.revenue_by_room_type["Suite"], Decimal::MAX);
    assert_eq!(report.average_booking_value, Decimal::MAX / Decimal::TWO);
    let shares = report.room_type_shares();
    assert_eq!(shares[0].share, Decimal::ONE_HUNDRED);
}

#[test]
fn test_share_of_tiny_total_saturates() {
    let data = ResortData {
        bookings: vec![booking(1, "Suite", Decimal::MAX, BookingStatus::Confirmed)],
        rooms: Vec::new(),
        transactions: vec![transaction(1, Decimal::new(1, 20), sample_as_of())],
    };

    let report = ReportService::generate_financial_report(&data, sample_as_of());

    assert_eq!(report.room_type_shares()[0].share, Decimal::MAX);
}
