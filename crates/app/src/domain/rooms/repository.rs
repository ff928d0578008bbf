//! Rooms Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::rooms::{
        data::{NewRoom, RoomPatch},
        records::{RoomId, RoomRecord},
    },
    storage::StorageError,
};

/// Single-room lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomLookup {
    /// By store-assigned identifier.
    Id(RoomId),
    /// By room number.
    Number(String),
}

/// Room listing filter; `None` matches every room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomFilter {
    /// Only rooms with this availability.
    pub available: Option<bool>,
}

impl RoomFilter {
    /// Whether `room` passes the filter.
    #[must_use]
    pub fn matches(&self, room: &RoomRecord) -> bool {
        self.available
            .is_none_or(|available| room.is_available == available)
    }
}

#[automock]
#[async_trait]
/// Room persistence operations.
pub trait RoomsRepository: Send + Sync {
    /// Stores a new, available room and returns it with its assigned ID.
    ///
    /// Fails with [`StorageError::UniqueViolation`] when the number is taken.
    async fn insert_room(&self, room: NewRoom) -> Result<RoomRecord, StorageError>;

    /// Returns the rooms matching `filter` in ID order.
    async fn find_rooms(&self, filter: RoomFilter) -> Result<Vec<RoomRecord>, StorageError>;

    /// Returns the first room matching the lookup.
    async fn find_room(&self, lookup: RoomLookup) -> Result<Option<RoomRecord>, StorageError>;

    /// Applies `patch` to the room, returning whether it exists.
    async fn update_room(&self, room: RoomId, patch: RoomPatch) -> Result<bool, StorageError>;
}
