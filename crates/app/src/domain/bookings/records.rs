//! Booking Records

use std::{fmt, str::FromStr};

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{rooms::records::RoomId, users::records::UserId},
    ids::TypedId,
};

/// Booking ID
pub type BookingId = TypedId<BookingRecord>;

/// Booking lifecycle state.
///
/// Bookings start out `Confirmed` and may be `Cancelled`. `Completed` is part of
/// the stored vocabulary but no operation produces it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Active booking; the only status that blocks the room.
    Confirmed,
    /// Cancelled by the guest or an operator.
    Cancelled,
    /// Stay finished.
    Completed,
}

impl BookingStatus {
    /// Lowercase token used in storage and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that names no booking status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown booking status {0:?}")]
pub struct UnknownBookingStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownBookingStatus(other.to_string())),
        }
    }
}

/// Booking Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Store-assigned identifier.
    pub id: BookingId,
    /// Guest the booking belongs to.
    pub user_id: UserId,
    /// Booked room.
    pub room_id: RoomId,
    /// Start of the stay.
    pub check_in: DateTime,
    /// End of the stay, exclusive.
    pub check_out: DateTime,

    /// Nights multiplied by the room's nightly price at booking time.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,

    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_tokens_round_trip() -> TestResult {
        for status in [
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert_eq!(serde_json::to_string(&status)?, format!("\"{status}\""));
            assert_eq!(status.as_str().parse::<BookingStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn record_serializes_dates_as_iso_text() -> TestResult {
        let record = BookingRecord {
            id: BookingId::new(1),
            user_id: UserId::new(2),
            room_id: RoomId::new(3),
            check_in: date(2025, 6, 1).at(0, 0, 0, 0),
            check_out: date(2025, 6, 4).at(0, 0, 0, 0),
            total_price: Decimal::new(750_000, 2),
            status: BookingStatus::Confirmed,
        };

        let value = serde_json::to_value(&record)?;

        assert_eq!(value["check_in"], "2025-06-01T00:00:00");
        assert_eq!(value["check_out"], "2025-06-04T00:00:00");
        assert_eq!(value["total_price"], "7500.00");
        assert_eq!(value["status"], "confirmed");

        Ok(())
    }
}
