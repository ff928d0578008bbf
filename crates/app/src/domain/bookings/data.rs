//! Booking Data

use jiff::civil::DateTime;
use rust_decimal::Decimal;

use crate::domain::{
    bookings::records::BookingStatus, rooms::records::RoomId, users::records::UserId,
};

/// A guest's request to stay in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    /// Guest making the booking.
    pub user_id: UserId,
    /// Room to book.
    pub room_id: RoomId,
    /// Start of the stay.
    pub check_in: DateTime,
    /// End of the stay, exclusive.
    pub check_out: DateTime,
}

/// New Booking Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    /// Guest the booking belongs to.
    pub user_id: UserId,
    /// Booked room.
    pub room_id: RoomId,
    /// Start of the stay.
    pub check_in: DateTime,
    /// End of the stay, exclusive.
    pub check_out: DateTime,
    /// Price of the whole stay.
    pub total_price: Decimal,
    /// Initial status.
    pub status: BookingStatus,
}

/// Partial booking update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPatch {
    /// New status.
    pub status: Option<BookingStatus>,
}
