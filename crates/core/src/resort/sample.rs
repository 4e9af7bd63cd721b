//! The resort's sample data set.

use chrono::{NaiveDate, NaiveDateTime};
use garuga_shared::types::{BookingId, RoomId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{
    Booking, BookingStatus, Room, RoomStatus, Transaction, TransactionStatus, TransactionType,
};

/// The collections the dashboards and reports read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResortData {
    /// All bookings.
    pub bookings: Vec<Booking>,
    /// All rooms.
    pub rooms: Vec<Room>,
    /// All payment transactions.
    pub transactions: Vec<Transaction>,
}

impl ResortData {
    /// The built-in sample set: 5 bookings, 6 rooms, 4 transactions.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            bookings: sample_bookings(),
            rooms: sample_rooms(),
            transactions: sample_transactions(),
        }
    }
}

/// Whole currency units.
fn usd(units: i64) -> Decimal {
    Decimal::new(units * 100, 2)
}

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

fn at(month: u32, day_of_month: u32, hour: u32, minute: u32) -> NaiveDateTime {
    day(month, day_of_month)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    guest_name: &str,
    room_type: &str,
    room_number: &str,
    stay: (NaiveDate, NaiveDate),
    total_amount: Decimal,
    status: BookingStatus,
    guest_count: u32,
    special_requests: &str,
    contact: (&str, &str),
) -> Booking {
    Booking {
        id: BookingId::new(id),
        guest_name: guest_name.to_string(),
        room_type: room_type.to_string(),
        room_number: room_number.to_string(),
        check_in: stay.0,
        check_out: stay.1,
        total_amount,
        status,
        guest_count,
        special_requests: special_requests.to_string(),
        contact_number: contact.0.to_string(),
        email: contact.1.to_string(),
    }
}

fn sample_bookings() -> Vec<Booking> {
    vec![
        booking(
            "B001",
            "John Smith",
            "Grand Suite",
            "G101",
            (day(2, 20), day(2, 25)),
            usd(1250),
            BookingStatus::CheckedIn,
            2,
            "Late check-in, Extra towels",
            ("+256 785 123456", "john.smith@email.com"),
        ),
        booking(
            "B002",
            "Sarah Johnson",
            "Double Room",
            "D205",
            (day(2, 18), day(2, 22)),
            usd(600),
            BookingStatus::Confirmed,
            2,
            "Vegetarian breakfast",
            ("+256 782 987654", "sarah.j@email.com"),
        ),
        booking(
            "B003",
            "Michael Brown",
            "Single Room",
            "S301",
            (day(2, 15), day(2, 20)),
            usd(375),
            BookingStatus::CheckedOut,
            1,
            "Early check-out",
            ("+256 777 456789", "michael.b@email.com"),
        ),
        booking(
            "B004",
            "Emma Davis",
            "Grand Suite",
            "G102",
            (day(2, 22), day(2, 28)),
            usd(1750),
            BookingStatus::Confirmed,
            3,
            "Extra bed, Baby cot",
            ("+256 703 234567", "emma.davis@email.com"),
        ),
        booking(
            "B005",
            "Robert Wilson",
            "Double Room",
            "D206",
            (day(2, 19), day(2, 21)),
            usd(400),
            BookingStatus::Cancelled,
            2,
            "",
            ("+256 755 345678", "robert.w@email.com"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn room(
    id: &str,
    number: &str,
    room_type: &str,
    floor: i32,
    price_per_night: Decimal,
    status: RoomStatus,
    amenities: &[&str],
    max_occupancy: u32,
    last_cleaned: NaiveDateTime,
    current_guest: Option<&str>,
) -> Room {
    Room {
        id: RoomId::new(id),
        number: number.to_string(),
        room_type: room_type.to_string(),
        floor,
        price_per_night,
        status,
        amenities: amenities.iter().map(ToString::to_string).collect(),
        max_occupancy,
        last_cleaned,
        current_guest: current_guest.map(ToString::to_string),
    }
}

const SUITE_AMENITIES: &[&str] = &["King Bed", "Ocean View", "Mini Bar", "Jacuzzi", "Balcony"];
const DOUBLE_AMENITIES: &[&str] = &["Queen Bed", "City View", "Mini Bar", "Work Desk"];
const SINGLE_AMENITIES: &[&str] = &["Single Bed", "Garden View", "Work Desk"];

fn sample_rooms() -> Vec<Room> {
    vec![
        room(
            "R001",
            "G101",
            "Grand Suite",
            1,
            usd(250),
            RoomStatus::Occupied,
            SUITE_AMENITIES,
            4,
            at(2, 20, 10, 0),
            Some("John Smith"),
        ),
        room(
            "R002",
            "G102",
            "Grand Suite",
            1,
            usd(250),
            RoomStatus::Available,
            SUITE_AMENITIES,
            4,
            at(2, 21, 14, 0),
            None,
        ),
        room(
            "R003",
            "D205",
            "Double Room",
            2,
            usd(150),
            RoomStatus::Available,
            DOUBLE_AMENITIES,
            2,
            at(2, 21, 12, 0),
            None,
        ),
        room(
            "R004",
            "D206",
            "Double Room",
            2,
            usd(150),
            RoomStatus::Cleaning,
            DOUBLE_AMENITIES,
            2,
            at(2, 21, 15, 0),
            None,
        ),
        room(
            "R005",
            "S301",
            "Single Room",
            3,
            usd(75),
            RoomStatus::Available,
            SINGLE_AMENITIES,
            1,
            at(2, 20, 16, 0),
            None,
        ),
        room(
            "R006",
            "S302",
            "Single Room",
            3,
            usd(75),
            RoomStatus::Maintenance,
            SINGLE_AMENITIES,
            1,
            at(2, 19, 11, 0),
            None,
        ),
    ]
}

fn transaction(
    id: &str,
    booking_id: &str,
    guest_name: &str,
    amount: Decimal,
    transaction_type: TransactionType,
    timestamp: NaiveDateTime,
    payment_method: &str,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        booking_id: BookingId::new(booking_id),
        guest_name: guest_name.to_string(),
        amount,
        transaction_type,
        timestamp,
        payment_method: payment_method.to_string(),
        status: TransactionStatus::Completed,
    }
}

fn sample_transactions() -> Vec<Transaction> {
    vec![
        transaction(
            "T001",
            "B001",
            "John Smith",
            usd(1250),
            TransactionType::Payment,
            at(2, 20, 14, 30),
            "Credit Card",
        ),
        transaction(
            "T002",
            "B002",
            "Sarah Johnson",
            usd(600),
            TransactionType::Payment,
            at(2, 18, 16, 45),
            "Mobile Money",
        ),
        transaction(
            "T003",
            "B003",
            "Michael Brown",
            usd(375),
            TransactionType::Payment,
            at(2, 15, 12, 0),
            "Credit Card",
        ),
        transaction(
            "T004",
            "B004",
            "Emma Davis",
            usd(875),
            TransactionType::Deposit,
            at(2, 22, 10, 15),
            "Bank Transfer",
        ),
    ]
}
