//! Room Data

use rust_decimal::Decimal;

use crate::domain::rooms::records::RoomType;

/// New Room Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    /// Room number, unique across the store.
    pub number: String,
    /// Kind of room.
    pub room_type: RoomType,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Nightly price.
    pub price_per_night: Decimal,
}

/// Partial room update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomPatch {
    /// New availability.
    pub is_available: Option<bool>,
}
