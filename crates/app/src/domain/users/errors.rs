//! Users service errors.

use thiserror::Error;

use crate::{errors::ErrorKind, storage::StorageError};

/// User directory errors.
#[derive(Debug, Error)]
pub enum UsersServiceError {
    /// The email has no `@` or no `.` after it.
    #[error("Invalid email format")]
    InvalidEmail,

    /// The password is shorter than `min` characters.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Another user already has this email.
    #[error("Email already exists")]
    EmailTaken,

    /// The store failed.
    #[error(transparent)]
    Storage(StorageError),
}

impl UsersServiceError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmail | Self::PasswordTooShort { .. } => ErrorKind::Validation,
            Self::EmailTaken => ErrorKind::Conflict,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<StorageError> for UsersServiceError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::UniqueViolation(_) => Self::EmailTaken,
            other => Self::Storage(other),
        }
    }
}
