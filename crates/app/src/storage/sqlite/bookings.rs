use std::str::FromStr;

use async_trait::async_trait;
use jiff::civil::DateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, query, query_as, sqlite::SqliteRow};

use crate::{
    domain::{
        bookings::{
            BookingFilter, BookingsRepository,
            data::{BookingPatch, NewBooking},
            records::{BookingId, BookingRecord, BookingStatus},
        },
        rooms::records::RoomId,
        users::records::UserId,
    },
    storage::{SqliteStore, StorageError},
};

use super::column_decode_error;

const INSERT_BOOKING_SQL: &str = include_str!("sql/insert_booking.sql");
const FIND_BOOKINGS_SQL: &str = include_str!("sql/find_bookings.sql");
const FIND_BOOKING_SQL: &str = include_str!("sql/find_booking.sql");
const UPDATE_BOOKING_SQL: &str = include_str!("sql/update_booking.sql");

#[async_trait]
impl BookingsRepository for SqliteStore {
    async fn insert_booking(&self, booking: NewBooking) -> Result<BookingRecord, StorageError> {
        Ok(query_as::<_, BookingRecord>(INSERT_BOOKING_SQL)
            .bind(booking.user_id.into_inner())
            .bind(booking.room_id.into_inner())
            .bind(booking.check_in.to_string())
            .bind(booking.check_out.to_string())
            .bind(booking.total_price.to_string())
            .bind(booking.status.as_str())
            .fetch_one(self.pool())
            .await?)
    }

    async fn find_bookings(
        &self,
        filter: BookingFilter,
    ) -> Result<Vec<BookingRecord>, StorageError> {
        Ok(query_as::<_, BookingRecord>(FIND_BOOKINGS_SQL)
            .bind(filter.user.map(UserId::into_inner))
            .bind(filter.room.map(RoomId::into_inner))
            .bind(filter.status.map(BookingStatus::as_str))
            .fetch_all(self.pool())
            .await?)
    }

    async fn find_booking(
        &self,
        booking: BookingId,
    ) -> Result<Option<BookingRecord>, StorageError> {
        Ok(query_as::<_, BookingRecord>(FIND_BOOKING_SQL)
            .bind(booking.into_inner())
            .fetch_optional(self.pool())
            .await?)
    }

    async fn update_booking(
        &self,
        booking: BookingId,
        patch: BookingPatch,
    ) -> Result<bool, StorageError> {
        let rows_affected = query(UPDATE_BOOKING_SQL)
            .bind(booking.into_inner())
            .bind(patch.status.map(BookingStatus::as_str))
            .execute(self.pool())
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for BookingRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let check_in: String = row.try_get("check_in")?;
        let check_out: String = row.try_get("check_out")?;
        let total_price: String = row.try_get("total_price")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            id: BookingId::new(row.try_get("id")?),
            user_id: UserId::new(row.try_get("user_id")?),
            room_id: RoomId::new(row.try_get("room_id")?),
            check_in: DateTime::from_str(&check_in)
                .map_err(|e| column_decode_error("check_in", e))?,
            check_out: DateTime::from_str(&check_out)
                .map_err(|e| column_decode_error("check_out", e))?,
            total_price: Decimal::from_str(&total_price)
                .map_err(|e| column_decode_error("total_price", e))?,
            status: BookingStatus::from_str(&status)
                .map_err(|e| column_decode_error("status", e))?,
        })
    }
}
