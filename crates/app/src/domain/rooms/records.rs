//! Room Records

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TypedId;

/// Room ID
pub type RoomId = TypedId<RoomRecord>;

/// Kind of room on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// One guest.
    Single,
    /// Two guests.
    Double,
    /// Shared room with beds sold together.
    Dormitory,
}

impl RoomType {
    /// Lowercase token used in storage and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Dormitory => "dormitory",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that names no room type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown room type {0:?}")]
pub struct UnknownRoomType(pub String);

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "dormitory" => Ok(Self::Dormitory),
            other => Err(UnknownRoomType(other.to_string())),
        }
    }
}

/// Room Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Store-assigned identifier.
    pub id: RoomId,

    /// Room number, unique across the store.
    pub number: String,

    /// Kind of room.
    pub room_type: RoomType,

    /// Maximum number of guests.
    pub capacity: u32,

    /// Nightly price.
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_night: Decimal,

    /// Whether the room can currently be booked.
    pub is_available: bool,
}
