//! Rooms service errors.

use thiserror::Error;

use crate::{errors::ErrorKind, storage::StorageError};

/// Room inventory errors.
#[derive(Debug, Error)]
pub enum RoomsServiceError {
    /// Another room already has this number.
    #[error("Room number already exists")]
    NumberTaken,

    /// Capacity is zero.
    #[error("Capacity must be at least 1")]
    InvalidCapacity,

    /// Price per night is zero or negative.
    #[error("Price per night must be positive")]
    InvalidPrice,

    /// The store failed.
    #[error(transparent)]
    Storage(StorageError),
}

impl RoomsServiceError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NumberTaken => ErrorKind::Conflict,
            Self::InvalidCapacity | Self::InvalidPrice => ErrorKind::Validation,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<StorageError> for RoomsServiceError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::UniqueViolation(_) => Self::NumberTaken,
            other => Self::Storage(other),
        }
    }
}
