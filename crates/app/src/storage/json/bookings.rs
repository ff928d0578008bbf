use async_trait::async_trait;

use crate::{
    domain::{
        bookings::{
            BookingFilter, BookingsRepository,
            data::{BookingPatch, NewBooking},
            records::{BookingId, BookingRecord},
        },
        rooms::records::RoomRecord,
        users::records::UserRecord,
    },
    storage::{JsonStore, StorageError},
};

use super::{BOOKINGS_FILE, Document, ROOMS_FILE, USERS_FILE, next_id};

impl Document for BookingRecord {
    fn id(&self) -> i64 {
        self.id.into_inner()
    }
}

#[async_trait]
impl BookingsRepository for JsonStore {
    async fn insert_booking(&self, booking: NewBooking) -> Result<BookingRecord, StorageError> {
        let _guard = self.write_lock.lock().await;

        let users: Vec<UserRecord> = self.load(USERS_FILE).await?;
        let rooms: Vec<RoomRecord> = self.load(ROOMS_FILE).await?;

        if !users.iter().any(|user| user.id == booking.user_id)
            || !rooms.iter().any(|room| room.id == booking.room_id)
        {
            return Err(StorageError::InvalidReference);
        }

        let mut bookings: Vec<BookingRecord> = self.load(BOOKINGS_FILE).await?;

        let record = BookingRecord {
            id: BookingId::new(next_id(&bookings)),
            user_id: booking.user_id,
            room_id: booking.room_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            total_price: booking.total_price,
            status: booking.status,
        };

        bookings.push(record.clone());

        self.save(BOOKINGS_FILE, &bookings).await?;

        Ok(record)
    }

    async fn find_bookings(
        &self,
        filter: BookingFilter,
    ) -> Result<Vec<BookingRecord>, StorageError> {
        let bookings: Vec<BookingRecord> = self.load(BOOKINGS_FILE).await?;

        Ok(bookings
            .into_iter()
            .filter(|booking| filter.matches(booking))
            .collect())
    }

    async fn find_booking(
        &self,
        booking: BookingId,
    ) -> Result<Option<BookingRecord>, StorageError> {
        let bookings: Vec<BookingRecord> = self.load(BOOKINGS_FILE).await?;

        Ok(bookings.into_iter().find(|record| record.id == booking))
    }

    async fn update_booking(
        &self,
        booking: BookingId,
        patch: BookingPatch,
    ) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut bookings: Vec<BookingRecord> = self.load(BOOKINGS_FILE).await?;

        let Some(record) = bookings.iter_mut().find(|record| record.id == booking) else {
            return Ok(false);
        };

        if let Some(status) = patch.status {
            record.status = status;
        }

        self.save(BOOKINGS_FILE, &bookings).await?;

        Ok(true)
    }
}
