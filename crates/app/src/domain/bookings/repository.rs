//! Bookings Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        bookings::{
            data::{BookingPatch, NewBooking},
            records::{BookingId, BookingRecord, BookingStatus},
        },
        rooms::records::RoomId,
        users::records::UserId,
    },
    storage::StorageError,
};

/// Booking listing filter; each `None` field matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Only bookings made by this user.
    pub user: Option<UserId>,
    /// Only bookings on this room.
    pub room: Option<RoomId>,
    /// Only bookings in this status.
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    /// Confirmed bookings on `room`, the set a new stay must not overlap.
    #[must_use]
    pub fn confirmed_for_room(room: RoomId) -> Self {
        Self {
            room: Some(room),
            status: Some(BookingStatus::Confirmed),
            ..Self::default()
        }
    }

    /// Every booking made by `user`.
    #[must_use]
    pub fn for_user(user: UserId) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    /// Whether `booking` passes every set field.
    #[must_use]
    pub fn matches(&self, booking: &BookingRecord) -> bool {
        self.user.is_none_or(|user| booking.user_id == user)
            && self.room.is_none_or(|room| booking.room_id == room)
            && self.status.is_none_or(|status| booking.status == status)
    }
}

#[automock]
#[async_trait]
/// Booking persistence operations.
pub trait BookingsRepository: Send + Sync {
    /// Stores a new booking and returns it with its assigned ID.
    async fn insert_booking(&self, booking: NewBooking) -> Result<BookingRecord, StorageError>;

    /// Returns the bookings matching `filter` in ID order.
    async fn find_bookings(&self, filter: BookingFilter)
    -> Result<Vec<BookingRecord>, StorageError>;

    /// Returns the booking with the given ID.
    async fn find_booking(&self, booking: BookingId)
    -> Result<Option<BookingRecord>, StorageError>;

    /// Applies `patch` to the booking, returning whether it exists.
    async fn update_booking(
        &self,
        booking: BookingId,
        patch: BookingPatch,
    ) -> Result<bool, StorageError>;
}
