//! Test context for service-level integration tests.

use std::sync::Arc;

use tempfile::TempDir;

use crate::{
    context::AppContext,
    domain::{bookings::BookingsService, rooms::RoomsService, users::UsersService},
    storage::{JsonStore, SqliteStore, StorageError},
};

/// Real services over a fresh, private store.
pub(crate) struct TestContext {
    pub users: Arc<dyn UsersService>,
    pub rooms: Arc<dyn RoomsService>,
    pub bookings: Arc<dyn BookingsService>,

    // Keeps the JSON data directory alive for the lifetime of the context.
    _data_dir: Option<TempDir>,
}

impl TestContext {
    /// Services over an in-memory `SQLite` database with migrations applied.
    pub(crate) async fn new() -> Result<Self, StorageError> {
        let store = SqliteStore::connect("sqlite::memory:").await?;

        Ok(Self::wire(AppContext::from_store(store), None))
    }

    /// Services over JSON files in a temporary directory.
    pub(crate) fn json() -> Result<Self, std::io::Error> {
        let dir = tempfile::tempdir()?;
        let store = JsonStore::new(dir.path());

        Ok(Self::wire(AppContext::from_store(store), Some(dir)))
    }

    /// The services as an [`AppContext`], for exercising the command layer.
    pub(crate) fn app(&self) -> AppContext {
        AppContext {
            users: self.users.clone(),
            rooms: self.rooms.clone(),
            bookings: self.bookings.clone(),
        }
    }

    fn wire(app: AppContext, data_dir: Option<TempDir>) -> Self {
        Self {
            users: app.users,
            rooms: app.rooms,
            bookings: app.bookings,
            _data_dir: data_dir,
        }
    }
}
