use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, query, query_as, sqlite::SqliteRow};

use crate::{
    domain::rooms::{
        RoomFilter, RoomLookup, RoomsRepository,
        data::{NewRoom, RoomPatch},
        records::{RoomId, RoomRecord, RoomType},
    },
    storage::{SqliteStore, StorageError},
};

use super::column_decode_error;

const INSERT_ROOM_SQL: &str = include_str!("sql/insert_room.sql");
const FIND_ROOMS_SQL: &str = include_str!("sql/find_rooms.sql");
const FIND_ROOM_BY_ID_SQL: &str = include_str!("sql/find_room_by_id.sql");
const FIND_ROOM_BY_NUMBER_SQL: &str = include_str!("sql/find_room_by_number.sql");
const UPDATE_ROOM_SQL: &str = include_str!("sql/update_room.sql");

#[async_trait]
impl RoomsRepository for SqliteStore {
    async fn insert_room(&self, room: NewRoom) -> Result<RoomRecord, StorageError> {
        Ok(query_as::<_, RoomRecord>(INSERT_ROOM_SQL)
            .bind(room.number)
            .bind(room.room_type.as_str())
            .bind(i64::from(room.capacity))
            .bind(room.price_per_night.to_string())
            .fetch_one(self.pool())
            .await?)
    }

    async fn find_rooms(&self, filter: RoomFilter) -> Result<Vec<RoomRecord>, StorageError> {
        Ok(query_as::<_, RoomRecord>(FIND_ROOMS_SQL)
            .bind(filter.available)
            .fetch_all(self.pool())
            .await?)
    }

    async fn find_room(&self, lookup: RoomLookup) -> Result<Option<RoomRecord>, StorageError> {
        let room = match lookup {
            RoomLookup::Id(id) => {
                query_as::<_, RoomRecord>(FIND_ROOM_BY_ID_SQL)
                    .bind(id.into_inner())
                    .fetch_optional(self.pool())
                    .await?
            }
            RoomLookup::Number(number) => {
                query_as::<_, RoomRecord>(FIND_ROOM_BY_NUMBER_SQL)
                    .bind(number)
                    .fetch_optional(self.pool())
                    .await?
            }
        };

        Ok(room)
    }

    async fn update_room(&self, room: RoomId, patch: RoomPatch) -> Result<bool, StorageError> {
        let rows_affected = query(UPDATE_ROOM_SQL)
            .bind(room.into_inner())
            .bind(patch.is_available)
            .execute(self.pool())
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for RoomRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let room_type: String = row.try_get("room_type")?;
        let capacity: i64 = row.try_get("capacity")?;
        let price_per_night: String = row.try_get("price_per_night")?;

        Ok(Self {
            id: RoomId::new(row.try_get("id")?),
            number: row.try_get("number")?,
            room_type: RoomType::from_str(&room_type)
                .map_err(|e| column_decode_error("room_type", e))?,
            capacity: u32::try_from(capacity).map_err(|e| column_decode_error("capacity", e))?,
            price_per_night: Decimal::from_str(&price_per_night)
                .map_err(|e| column_decode_error("price_per_night", e))?,
            is_available: row.try_get("is_available")?,
        })
    }
}
