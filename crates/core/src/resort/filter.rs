//! Dashboard filters and summary counts.

use serde::{Deserialize, Serialize};

use super::types::{Booking, BookingStatus, Room, RoomStatus};

/// Search box plus status chip on the bookings dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFilter {
    /// Free-text query. Empty matches everything.
    pub query: String,
    /// Status to keep. `None` keeps every status.
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    /// Filter on a search query only.
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            status: None,
        }
    }

    /// Filter on a status only.
    #[must_use]
    pub const fn with_status(status: BookingStatus) -> Self {
        Self {
            query: String::new(),
            status: Some(status),
        }
    }

    /// Returns true if `booking` passes both the query and the status.
    ///
    /// The query is compared case-insensitively, as typed, against the
    /// guest name, the room number and the booking ID.
    #[must_use]
    pub fn matches(&self, booking: &Booking) -> bool {
        if self.status.is_some_and(|status| status != booking.status) {
            return false;
        }

        let query = self.query.to_lowercase();
        if query.is_empty() {
            return true;
        }

        [
            booking.guest_name.as_str(),
            booking.room_number.as_str(),
            booking.id.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }

    /// Bookings that pass the filter, in input order.
    #[must_use]
    pub fn apply<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Header counts on the bookings dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    /// All bookings.
    pub total: usize,
    /// Confirmed or checked in.
    pub active: usize,
    /// Cancelled.
    pub cancelled: usize,
}

impl BookingSummary {
    /// Counts `bookings`.
    #[must_use]
    pub fn from_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        bookings.into_iter().fold(Self::default(), |mut acc, b| {
            acc.total += 1;
            if b.status.is_active() {
                acc.active += 1;
            }
            if b.status == BookingStatus::Cancelled {
                acc.cancelled += 1;
            }
            acc
        })
    }
}

/// Floor and status chips on the rooms dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFilter {
    /// Floor to keep. `None` is "All".
    pub floor: Option<i32>,
    /// Status to keep. `None` keeps every status.
    pub status: Option<RoomStatus>,
}

impl RoomFilter {
    /// Returns true if `room` is on the selected floor with the selected status.
    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        self.floor.is_none_or(|floor| floor == room.floor)
            && self.status.is_none_or(|status| status == room.status)
    }

    /// Rooms that pass the filter, in input order.
    #[must_use]
    pub fn apply<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        rooms.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Distinct floors, ascending, for the floor chips.
#[must_use]
pub fn floors(rooms: &[Room]) -> Vec<i32> {
    let mut floors: Vec<i32> = rooms.iter().map(|r| r.floor).collect();
    floors.sort_unstable();
    floors.dedup();
    floors
}

/// Header counts on the rooms dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// All rooms.
    pub total: usize,
    /// Ready for a guest.
    pub available: usize,
    /// A guest is staying.
    pub occupied: usize,
}

impl RoomSummary {
    /// Counts `rooms`.
    #[must_use]
    pub fn from_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        rooms.into_iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            match r.status {
                RoomStatus::Available => acc.available += 1,
                RoomStatus::Occupied => acc.occupied += 1,
                RoomStatus::Maintenance | RoomStatus::Cleaning | RoomStatus::OutOfOrder => {}
            }
            acc
        })
    }
}
