//! Persistence backends.
//!
//! Both backends implement the same three repository traits
//! ([`UsersRepository`](crate::domain::users::UsersRepository),
//! [`RoomsRepository`](crate::domain::rooms::RoomsRepository) and
//! [`BookingsRepository`](crate::domain::bookings::BookingsRepository)) with
//! identical semantics, so services never see which one is in use.

use std::{io, path::PathBuf};

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

pub mod json;
pub mod sqlite;

#[cfg(test)]
mod contract;

pub use json::JsonStore;
pub use sqlite::SqliteStore;

/// Unique field names reported by [`StorageError::UniqueViolation`].
pub const EMAIL_FIELD: &str = "email";
pub const ROOM_NUMBER_FIELD: &str = "room number";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0} already exists")]
    UniqueViolation(&'static str),

    #[error("related record not found")]
    InvalidReference,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),

    #[error("failed to run migrations")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed data in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        match database_error.kind() {
            ErrorKind::UniqueViolation => {
                Self::UniqueViolation(unique_field(DatabaseError::message(database_error)))
            }
            ErrorKind::ForeignKeyViolation => Self::InvalidReference,
            _ => Self::Sql(error),
        }
    }
}

// SQLite reports the violated column as `table.column`.
fn unique_field(message: &str) -> &'static str {
    if message.contains("users.email") {
        EMAIL_FIELD
    } else if message.contains("rooms.number") {
        ROOM_NUMBER_FIELD
    } else {
        "record"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_field_reads_sqlite_constraint_messages() {
        assert_eq!(
            unique_field("UNIQUE constraint failed: users.email"),
            EMAIL_FIELD
        );
        assert_eq!(
            unique_field("UNIQUE constraint failed: rooms.number"),
            ROOM_NUMBER_FIELD
        );
        assert_eq!(unique_field("UNIQUE constraint failed: x.y"), "record");
    }

    #[test]
    fn unique_violation_message_names_the_field() {
        assert_eq!(
            StorageError::UniqueViolation(EMAIL_FIELD).to_string(),
            "email already exists"
        );
    }
}
