//! Bookings service errors.

use thiserror::Error;

use crate::{
    domain::{rooms::RoomsServiceError, users::UsersServiceError},
    errors::ErrorKind,
    storage::StorageError,
};

/// Booking ledger errors.
#[derive(Debug, Error)]
pub enum BookingsServiceError {
    /// The guest does not exist.
    #[error("User not found")]
    UserNotFound,

    /// The room does not exist.
    #[error("Room not found")]
    RoomNotFound,

    /// The room is marked unavailable.
    #[error("Room is not available")]
    RoomUnavailable,

    /// Check-out is not after check-in.
    #[error("Check-out date must be after check-in date")]
    InvalidRange,

    /// Check-in is before the current moment.
    #[error("Check-in date cannot be in the past")]
    PastCheckIn,

    /// A confirmed booking already covers part of the stay.
    #[error("Room is already booked for these dates")]
    DoubleBooked,

    /// The total price does not fit a decimal.
    #[error("Total price is out of range")]
    PriceOverflow,

    /// Looking up the guest failed.
    #[error(transparent)]
    Users(#[from] UsersServiceError),

    /// Looking up the room failed.
    #[error(transparent)]
    Rooms(#[from] RoomsServiceError),

    /// The store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl BookingsServiceError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound | Self::RoomNotFound => ErrorKind::NotFound,
            Self::RoomUnavailable => ErrorKind::State,
            Self::InvalidRange | Self::PastCheckIn | Self::PriceOverflow => ErrorKind::Validation,
            Self::DoubleBooked => ErrorKind::Conflict,
            Self::Users(error) => error.kind(),
            Self::Rooms(error) => error.kind(),
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}
