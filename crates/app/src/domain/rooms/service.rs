//! Rooms service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::rooms::{
    data::{NewRoom, RoomPatch},
    errors::RoomsServiceError,
    records::{RoomId, RoomRecord},
    repository::{RoomFilter, RoomLookup, RoomsRepository},
};

/// Room inventory backed by a [`RoomsRepository`].
#[derive(Clone)]
pub struct RoomsInventory {
    repository: Arc<dyn RoomsRepository>,
}

impl fmt::Debug for RoomsInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomsInventory").finish_non_exhaustive()
    }
}

impl RoomsInventory {
    /// Inventory over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn RoomsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RoomsService for RoomsInventory {
    #[tracing::instrument(
        name = "rooms.service.create_room",
        skip(self, room),
        fields(number = %room.number, room_type = %room.room_type),
        err
    )]
    async fn create_room(&self, room: NewRoom) -> Result<RoomRecord, RoomsServiceError> {
        let mut room = room;

        room.price_per_night.rescale(2);

        if room.capacity == 0 {
            return Err(RoomsServiceError::InvalidCapacity);
        }

        if room.price_per_night <= Decimal::ZERO {
            return Err(RoomsServiceError::InvalidPrice);
        }

        let existing = self
            .repository
            .find_room(RoomLookup::Number(room.number.clone()))
            .await?;

        if existing.is_some() {
            return Err(RoomsServiceError::NumberTaken);
        }

        let room = self.repository.insert_room(room).await?;

        info!(room_id = %room.id, "created room");

        Ok(room)
    }

    async fn list_available_rooms(&self) -> Result<Vec<RoomRecord>, RoomsServiceError> {
        Ok(self
            .repository
            .find_rooms(RoomFilter {
                available: Some(true),
            })
            .await?)
    }

    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsServiceError> {
        Ok(self.repository.find_rooms(RoomFilter::default()).await?)
    }

    #[tracing::instrument(name = "rooms.service.set_availability", skip(self), err)]
    async fn set_availability(
        &self,
        room: RoomId,
        is_available: bool,
    ) -> Result<bool, RoomsServiceError> {
        let updated = self
            .repository
            .update_room(
                room,
                RoomPatch {
                    is_available: Some(is_available),
                },
            )
            .await?;

        if updated {
            info!("updated room availability");
        }

        Ok(updated)
    }

    async fn get_room(&self, room: RoomId) -> Result<Option<RoomRecord>, RoomsServiceError> {
        Ok(self.repository.find_room(RoomLookup::Id(room)).await?)
    }

    async fn get_room_by_number(
        &self,
        number: &str,
    ) -> Result<Option<RoomRecord>, RoomsServiceError> {
        Ok(self
            .repository
            .find_room(RoomLookup::Number(number.to_string()))
            .await?)
    }
}

#[automock]
#[async_trait]
/// Room inventory management.
pub trait RoomsService: Send + Sync {
    /// Creates a new room, available by default.
    async fn create_room(&self, room: NewRoom) -> Result<RoomRecord, RoomsServiceError>;

    /// Retrieve rooms currently flagged as available.
    async fn list_available_rooms(&self) -> Result<Vec<RoomRecord>, RoomsServiceError>;

    /// Retrieve every room regardless of availability.
    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsServiceError>;

    /// Sets the availability flag, returning whether the room exists.
    async fn set_availability(
        &self,
        room: RoomId,
        is_available: bool,
    ) -> Result<bool, RoomsServiceError>;

    /// Retrieve a room by ID.
    async fn get_room(&self, room: RoomId) -> Result<Option<RoomRecord>, RoomsServiceError>;

    /// Retrieve a room by its number.
    async fn get_room_by_number(
        &self,
        number: &str,
    ) -> Result<Option<RoomRecord>, RoomsServiceError>;
}
