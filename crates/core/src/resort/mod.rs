//! Resort records and the bookings and rooms dashboards.
//!
//! Records are read-only sample data. The dashboards filter and count them;
//! money is always [`rust_decimal::Decimal`].

mod filter;
mod sample;
mod types;

pub use filter::{BookingFilter, BookingSummary, RoomFilter, RoomSummary, floors};
pub use sample::ResortData;
pub use types::{
    Booking, BookingStatus, Room, RoomStatus, StatusTone, Transaction, TransactionStatus,
    TransactionType,
};
