//! Bookings service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::civil::DateTime;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{Span, debug, info};

use crate::domain::{
    bookings::{
        data::{BookingPatch, BookingRequest, NewBooking},
        errors::BookingsServiceError,
        records::{BookingId, BookingRecord, BookingStatus},
        repository::{BookingFilter, BookingsRepository},
        stay::Stay,
    },
    rooms::RoomsService,
    users::{UsersService, records::UserId},
};

/// Booking ledger backed by a [`BookingsRepository`].
///
/// Users and rooms are only read, through their services, to validate the
/// references on a new booking.
#[derive(Clone)]
pub struct BookingsLedger {
    repository: Arc<dyn BookingsRepository>,
    users: Arc<dyn UsersService>,
    rooms: Arc<dyn RoomsService>,

    // Held across the overlap check and the insert so two in-process callers
    // cannot both pass the check for the same interval.
    write_lock: Arc<Mutex<()>>,
}

impl fmt::Debug for BookingsLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingsLedger").finish_non_exhaustive()
    }
}

impl BookingsLedger {
    /// Ledger over `repository`, validating references through `users` and `rooms`.
    #[must_use]
    pub fn new(
        repository: Arc<dyn BookingsRepository>,
        users: Arc<dyn UsersService>,
        rooms: Arc<dyn RoomsService>,
    ) -> Self {
        Self {
            repository,
            users,
            rooms,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

#[async_trait]
impl BookingsService for BookingsLedger {
    #[tracing::instrument(
        name = "bookings.service.create_booking",
        skip(self, request),
        fields(
            user_id = %request.user_id,
            room_id = %request.room_id,
            check_in = %request.check_in,
            check_out = %request.check_out,
            nights = tracing::field::Empty,
        ),
        err
    )]
    async fn create_booking(
        &self,
        request: BookingRequest,
        point_in_time: DateTime,
    ) -> Result<BookingRecord, BookingsServiceError> {
        self.users
            .get_user(request.user_id)
            .await?
            .ok_or(BookingsServiceError::UserNotFound)?;

        let room = self
            .rooms
            .get_room(request.room_id)
            .await?
            .ok_or(BookingsServiceError::RoomNotFound)?;

        if !room.is_available {
            return Err(BookingsServiceError::RoomUnavailable);
        }

        let stay = Stay::new(request.check_in, request.check_out)
            .ok_or(BookingsServiceError::InvalidRange)?;

        if stay.check_in() < point_in_time {
            return Err(BookingsServiceError::PastCheckIn);
        }

        Span::current().record("nights", stay.nights());

        let _guard = self.write_lock.lock().await;

        let confirmed = self
            .repository
            .find_bookings(BookingFilter::confirmed_for_room(room.id))
            .await?;

        if let Some(existing) = confirmed
            .iter()
            .find(|booking| stay.overlaps_range(booking.check_in, booking.check_out))
        {
            debug!(conflicting_booking_id = %existing.id, "stay overlaps a confirmed booking");

            return Err(BookingsServiceError::DoubleBooked);
        }

        let total_price = stay
            .price_at(room.price_per_night)
            .ok_or(BookingsServiceError::PriceOverflow)?;

        let booking = self
            .repository
            .insert_booking(NewBooking {
                user_id: request.user_id,
                room_id: room.id,
                check_in: stay.check_in(),
                check_out: stay.check_out(),
                total_price,
                status: BookingStatus::Confirmed,
            })
            .await?;

        info!(booking_id = %booking.id, %total_price, "created booking");

        Ok(booking)
    }

    #[tracing::instrument(name = "bookings.service.cancel_booking", skip(self), err)]
    async fn cancel_booking(&self, booking: BookingId) -> Result<bool, BookingsServiceError> {
        let cancelled = self
            .repository
            .update_booking(
                booking,
                BookingPatch {
                    status: Some(BookingStatus::Cancelled),
                },
            )
            .await?;

        if cancelled {
            info!("cancelled booking");
        }

        Ok(cancelled)
    }

    async fn get_booking(
        &self,
        booking: BookingId,
    ) -> Result<Option<BookingRecord>, BookingsServiceError> {
        Ok(self.repository.find_booking(booking).await?)
    }

    async fn list_user_bookings(
        &self,
        user: UserId,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        Ok(self
            .repository
            .find_bookings(BookingFilter::for_user(user))
            .await?)
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        Ok(self
            .repository
            .find_bookings(BookingFilter::default())
            .await?)
    }
}

#[automock]
#[async_trait]
/// Booking creation, cancellation and lookup.
pub trait BookingsService: Send + Sync {
    /// Books a room for a stay after validating it against `point_in_time`.
    ///
    /// Checks run in order and the first failure is returned: user exists, room
    /// exists, room is available, check-in precedes check-out, check-in is not
    /// before `point_in_time`, and no confirmed booking on the room overlaps.
    async fn create_booking(
        &self,
        request: BookingRequest,
        point_in_time: DateTime,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Marks a booking as cancelled, returning whether it exists.
    ///
    /// Ownership is not checked here; callers acting for a user must do so.
    async fn cancel_booking(&self, booking: BookingId) -> Result<bool, BookingsServiceError>;

    /// Retrieve a booking by ID.
    async fn get_booking(
        &self,
        booking: BookingId,
    ) -> Result<Option<BookingRecord>, BookingsServiceError>;

    /// Retrieve every booking made by `user`.
    async fn list_user_bookings(
        &self,
        user: UserId,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;

    /// Retrieve every booking.
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, BookingsServiceError>;
}
