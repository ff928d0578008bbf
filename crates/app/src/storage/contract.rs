//! Assertions every backend must satisfy, run against each of them.

use jiff::civil::date;
use rust_decimal::Decimal;
use testresult::TestResult;

use crate::{
    domain::{
        bookings::{
            BookingFilter, BookingsRepository,
            data::{BookingPatch, NewBooking},
            records::{BookingId, BookingStatus},
        },
        rooms::{
            RoomFilter, RoomLookup, RoomsRepository,
            data::{NewRoom, RoomPatch},
            records::{RoomId, RoomType},
        },
        users::{UserLookup, UsersRepository, data::NewUser, records::UserId},
    },
    storage::{EMAIL_FIELD, JsonStore, ROOM_NUMBER_FIELD, SqliteStore, StorageError},
};

trait Store: UsersRepository + RoomsRepository + BookingsRepository {}

impl<S: UsersRepository + RoomsRepository + BookingsRepository> Store for S {}

fn user(email: &str) -> NewUser {
    NewUser {
        name: "Guest".to_string(),
        email: email.to_string(),
        phone: "+254700000000".to_string(),
        password_hash: "hash".to_string(),
    }
}

fn room(number: &str) -> NewRoom {
    NewRoom {
        number: number.to_string(),
        room_type: RoomType::Dormitory,
        capacity: 4,
        price_per_night: Decimal::new(150_000, 2),
    }
}

fn booking(user_id: UserId, room_id: RoomId) -> NewBooking {
    NewBooking {
        user_id,
        room_id,
        check_in: date(2025, 6, 1).at(0, 0, 0, 0),
        check_out: date(2025, 6, 4).at(0, 0, 0, 0),
        total_price: Decimal::new(450_000, 2),
        status: BookingStatus::Confirmed,
    }
}

async fn users_contract(store: &impl Store) -> TestResult {
    let first = store.insert_user(user("a@example.com")).await?;
    let second = store.insert_user(user("b@example.com")).await?;

    assert_eq!(first.id, UserId::new(1));
    assert_eq!(second.id, UserId::new(2));

    let duplicate = store.insert_user(user("a@example.com")).await;

    assert!(
        matches!(duplicate, Err(StorageError::UniqueViolation(EMAIL_FIELD))),
        "expected email violation, got {duplicate:?}"
    );

    assert_eq!(store.find_users().await?, vec![first.clone(), second.clone()]);
    assert_eq!(
        store.find_user(UserLookup::Id(second.id)).await?,
        Some(second)
    );
    assert_eq!(
        store
            .find_user(UserLookup::Email("a@example.com".to_string()))
            .await?,
        Some(first)
    );
    assert_eq!(store.find_user(UserLookup::Id(UserId::new(9))).await?, None);

    Ok(())
}

async fn rooms_contract(store: &impl Store) -> TestResult {
    let first = store.insert_room(room("301")).await?;
    let second = store.insert_room(room("302")).await?;

    assert_eq!(first.id, RoomId::new(1));
    assert!(first.is_available, "rooms start available");
    assert_eq!(first.price_per_night.to_string(), "1500.00");

    let duplicate = store.insert_room(room("301")).await;

    assert!(
        matches!(duplicate, Err(StorageError::UniqueViolation(ROOM_NUMBER_FIELD))),
        "expected room number violation, got {duplicate:?}"
    );

    assert!(
        store
            .update_room(
                first.id,
                RoomPatch {
                    is_available: Some(false),
                },
            )
            .await?,
        "room exists"
    );
    assert!(
        !store
            .update_room(RoomId::new(99), RoomPatch::default())
            .await?,
        "no such room"
    );
    assert!(
        store.update_room(second.id, RoomPatch::default()).await?,
        "empty patch still reports existence"
    );

    let available = store
        .find_rooms(RoomFilter {
            available: Some(true),
        })
        .await?;
    let unavailable = store
        .find_rooms(RoomFilter {
            available: Some(false),
        })
        .await?;

    assert_eq!(available, vec![second.clone()]);
    assert_eq!(unavailable.len(), 1);
    assert_eq!(store.find_rooms(RoomFilter::default()).await?.len(), 2);
    assert_eq!(
        store
            .find_room(RoomLookup::Number("302".to_string()))
            .await?,
        Some(second)
    );

    Ok(())
}

async fn bookings_contract(store: &impl Store) -> TestResult {
    let guest = store.insert_user(user("a@example.com")).await?;
    let other = store.insert_user(user("b@example.com")).await?;
    let dorm = store.insert_room(room("301")).await?;

    let first = store.insert_booking(booking(guest.id, dorm.id)).await?;
    let second = store.insert_booking(booking(other.id, dorm.id)).await?;

    assert_eq!(first.id, BookingId::new(1));
    assert_eq!(second.id, BookingId::new(2));
    assert_eq!(first.check_in, date(2025, 6, 1).at(0, 0, 0, 0));
    assert_eq!(first.total_price.to_string(), "4500.00");
    assert_eq!(first.status, BookingStatus::Confirmed);

    assert_eq!(store.find_booking(first.id).await?, Some(first.clone()));
    assert_eq!(store.find_booking(BookingId::new(99)).await?, None);

    assert!(
        store
            .update_booking(
                second.id,
                BookingPatch {
                    status: Some(BookingStatus::Cancelled),
                },
            )
            .await?,
        "booking exists"
    );
    assert!(
        !store
            .update_booking(BookingId::new(99), BookingPatch::default())
            .await?,
        "no such booking"
    );

    assert_eq!(
        store
            .find_bookings(BookingFilter::confirmed_for_room(dorm.id))
            .await?,
        vec![first.clone()]
    );
    assert_eq!(
        store.find_bookings(BookingFilter::for_user(other.id)).await?.len(),
        1
    );
    assert_eq!(
        store
            .find_bookings(BookingFilter::default())
            .await?
            .iter()
            .map(|booking| booking.id)
            .collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let dangling = store
        .insert_booking(booking(UserId::new(99), dorm.id))
        .await;

    assert!(
        matches!(dangling, Err(StorageError::InvalidReference)),
        "expected InvalidReference, got {dangling:?}"
    );

    Ok(())
}

async fn sqlite() -> Result<SqliteStore, StorageError> {
    SqliteStore::connect("sqlite::memory:").await
}

#[tokio::test]
async fn sqlite_users() -> TestResult {
    users_contract(&sqlite().await?).await
}

#[tokio::test]
async fn sqlite_rooms() -> TestResult {
    rooms_contract(&sqlite().await?).await
}

#[tokio::test]
async fn sqlite_bookings() -> TestResult {
    bookings_contract(&sqlite().await?).await
}

#[tokio::test]
async fn json_users() -> TestResult {
    let dir = tempfile::tempdir()?;

    users_contract(&JsonStore::new(dir.path())).await
}

#[tokio::test]
async fn json_rooms() -> TestResult {
    let dir = tempfile::tempdir()?;

    rooms_contract(&JsonStore::new(dir.path())).await
}

#[tokio::test]
async fn json_bookings() -> TestResult {
    let dir = tempfile::tempdir()?;

    bookings_contract(&JsonStore::new(dir.path())).await
}
