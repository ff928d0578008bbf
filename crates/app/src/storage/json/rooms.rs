use async_trait::async_trait;

use crate::{
    domain::rooms::{
        RoomFilter, RoomLookup, RoomsRepository,
        data::{NewRoom, RoomPatch},
        records::{RoomId, RoomRecord},
    },
    storage::{JsonStore, ROOM_NUMBER_FIELD, StorageError},
};

use super::{Document, ROOMS_FILE, next_id};

impl Document for RoomRecord {
    fn id(&self) -> i64 {
        self.id.into_inner()
    }
}

impl RoomLookup {
    fn matches(&self, room: &RoomRecord) -> bool {
        match self {
            Self::Id(id) => room.id == *id,
            Self::Number(number) => room.number == *number,
        }
    }
}

#[async_trait]
impl RoomsRepository for JsonStore {
    async fn insert_room(&self, room: NewRoom) -> Result<RoomRecord, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut rooms: Vec<RoomRecord> = self.load(ROOMS_FILE).await?;

        if rooms.iter().any(|existing| existing.number == room.number) {
            return Err(StorageError::UniqueViolation(ROOM_NUMBER_FIELD));
        }

        let record = RoomRecord {
            id: RoomId::new(next_id(&rooms)),
            number: room.number,
            room_type: room.room_type,
            capacity: room.capacity,
            price_per_night: room.price_per_night,
            is_available: true,
        };

        rooms.push(record.clone());

        self.save(ROOMS_FILE, &rooms).await?;

        Ok(record)
    }

    async fn find_rooms(&self, filter: RoomFilter) -> Result<Vec<RoomRecord>, StorageError> {
        let rooms: Vec<RoomRecord> = self.load(ROOMS_FILE).await?;

        Ok(rooms.into_iter().filter(|room| filter.matches(room)).collect())
    }

    async fn find_room(&self, lookup: RoomLookup) -> Result<Option<RoomRecord>, StorageError> {
        let rooms: Vec<RoomRecord> = self.load(ROOMS_FILE).await?;

        Ok(rooms.into_iter().find(|room| lookup.matches(room)))
    }

    async fn update_room(&self, room: RoomId, patch: RoomPatch) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut rooms: Vec<RoomRecord> = self.load(ROOMS_FILE).await?;

        let Some(record) = rooms.iter_mut().find(|record| record.id == room) else {
            return Ok(false);
        };

        if let Some(is_available) = patch.is_available {
            record.is_available = is_available;
        }

        self.save(ROOMS_FILE, &rooms).await?;

        Ok(true)
    }
}
