//! Resort record types.

use chrono::{NaiveDate, NaiveDateTime};
use garuga_shared::types::{BookingId, RoomId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Presentation category of a status value.
///
/// Each status maps to exactly one tone; front ends pick colours per tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    /// Good news (confirmed, available, completed).
    Positive,
    /// In progress or currently in use.
    Active,
    /// Attention needed soon.
    Caution,
    /// Something went wrong or was called off.
    Critical,
    /// Finished or out of play.
    Muted,
}

/// A guest booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking ID.
    pub id: BookingId,
    /// Guest name.
    pub guest_name: String,
    /// Room type name (e.g. "Grand Suite").
    pub room_type: String,
    /// Room number (e.g. "G101").
    pub room_number: String,
    /// Check-in date.
    pub check_in: NaiveDate,
    /// Check-out date.
    pub check_out: NaiveDate,
    /// Total booked amount.
    pub total_amount: Decimal,
    /// Booking status.
    pub status: BookingStatus,
    /// Number of guests.
    pub guest_count: u32,
    /// Free-text special requests.
    pub special_requests: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Contact email.
    pub email: String,
}

impl Booking {
    /// Number of nights between check-in and check-out.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Confirmed, guest not yet arrived.
    Confirmed,
    /// Guest is in the room.
    CheckedIn,
    /// Guest has left.
    CheckedOut,
    /// Booking was cancelled.
    Cancelled,
    /// Awaiting confirmation.
    Pending,
}

impl BookingStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 5] = [
        Self::Confirmed,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Cancelled,
        Self::Pending,
    ];

    /// Upper-case label shown on chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED IN",
            Self::CheckedOut => "CHECKED OUT",
            Self::Cancelled => "CANCELLED",
            Self::Pending => "PENDING",
        }
    }

    /// Presentation tone.
    #[must_use]
    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Confirmed => StatusTone::Positive,
            Self::CheckedIn => StatusTone::Active,
            Self::CheckedOut => StatusTone::Muted,
            Self::Cancelled => StatusTone::Critical,
            Self::Pending => StatusTone::Caution,
        }
    }

    /// Returns true for bookings that still hold a room.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }
}

/// A resort room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room ID.
    pub id: RoomId,
    /// Room number (e.g. "G101").
    pub number: String,
    /// Room type name.
    pub room_type: String,
    /// Floor number.
    pub floor: i32,
    /// Nightly price.
    pub price_per_night: Decimal,
    /// Housekeeping status.
    pub status: RoomStatus,
    /// Amenities, in display order.
    pub amenities: Vec<String>,
    /// Maximum number of guests.
    pub max_occupancy: u32,
    /// When the room was last cleaned.
    pub last_cleaned: NaiveDateTime,
    /// Current guest, if occupied.
    pub current_guest: Option<String>,
}

/// Room housekeeping status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Ready for a guest.
    Available,
    /// A guest is staying.
    Occupied,
    /// Under maintenance.
    Maintenance,
    /// Being cleaned.
    Cleaning,
    /// Not usable.
    OutOfOrder,
}

impl RoomStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 5] = [
        Self::Available,
        Self::Occupied,
        Self::Maintenance,
        Self::Cleaning,
        Self::OutOfOrder,
    ];

    /// Upper-case label shown on chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Occupied => "OCCUPIED",
            Self::Maintenance => "MAINTENANCE",
            Self::Cleaning => "CLEANING",
            Self::OutOfOrder => "OUT OF ORDER",
        }
    }

    /// Presentation tone.
    #[must_use]
    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Available => StatusTone::Positive,
            Self::Occupied => StatusTone::Active,
            Self::Maintenance => StatusTone::Critical,
            Self::Cleaning => StatusTone::Caution,
            Self::OutOfOrder => StatusTone::Muted,
        }
    }
}

/// A payment movement tied to a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Booking the money belongs to.
    pub booking_id: BookingId,
    /// Guest name.
    pub guest_name: String,
    /// Amount moved.
    pub amount: Decimal,
    /// Kind of movement.
    pub transaction_type: TransactionType,
    /// When it happened (resort local time).
    pub timestamp: NaiveDateTime,
    /// Payment method (e.g. "Credit Card", "Mobile Money").
    pub payment_method: String,
    /// Processing status.
    pub status: TransactionStatus,
}

/// Kind of payment movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Full or partial payment.
    Payment,
    /// Money returned to the guest.
    Refund,
    /// Advance deposit.
    Deposit,
}

impl TransactionType {
    /// Upper-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Payment => "PAYMENT",
            Self::Refund => "REFUND",
            Self::Deposit => "DEPOSIT",
        }
    }

    /// Presentation tone.
    #[must_use]
    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Payment => StatusTone::Positive,
            Self::Refund => StatusTone::Critical,
            Self::Deposit => StatusTone::Active,
        }
    }
}

/// Transaction processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Settled.
    Completed,
    /// Awaiting settlement.
    Pending,
    /// Declined or errored.
    Failed,
    /// Returned to the guest.
    Refunded,
}

impl TransactionStatus {
    /// Upper-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::Pending => "PENDING",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }

    /// Presentation tone.
    #[must_use]
    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Completed => StatusTone::Positive,
            Self::Pending => StatusTone::Caution,
            Self::Failed => StatusTone::Critical,
            Self::Refunded => StatusTone::Muted,
        }
    }
}
