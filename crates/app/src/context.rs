//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    config::{Backend, storage::StorageConfig},
    domain::{
        bookings::{BookingsLedger, BookingsRepository, BookingsService},
        rooms::{RoomsInventory, RoomsRepository, RoomsService},
        users::{UsersDirectory, UsersRepository, UsersService},
    },
    storage::{JsonStore, SqliteStore, StorageError},
};

/// Failures while building the [`AppContext`].
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The selected store could not be opened.
    #[error("failed to open storage")]
    Storage(#[source] StorageError),
}

/// Service graph built once at start-up and passed to whatever needs it.
#[derive(Clone)]
pub struct AppContext {
    /// User registration and login.
    pub users: Arc<dyn UsersService>,
    /// Room inventory.
    pub rooms: Arc<dyn RoomsService>,
    /// Booking ledger.
    pub bookings: Arc<dyn BookingsService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Wire the services over a single store implementing every repository.
    #[must_use]
    pub fn from_store<S>(store: S) -> Self
    where
        S: UsersRepository + RoomsRepository + BookingsRepository + 'static,
    {
        let store = Arc::new(store);

        let users: Arc<dyn UsersService> = Arc::new(UsersDirectory::new(store.clone()));
        let rooms: Arc<dyn RoomsService> = Arc::new(RoomsInventory::new(store.clone()));
        let bookings = Arc::new(BookingsLedger::new(store, users.clone(), rooms.clone()));

        Self {
            users,
            rooms,
            bookings,
        }
    }

    /// Build application context from storage settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the selected store cannot be opened.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, AppInitError> {
        match config.backend {
            Backend::Sqlite => {
                let store = SqliteStore::connect(&config.database_url)
                    .await
                    .map_err(AppInitError::Storage)?;

                info!(database_url = %config.database_url, "using sqlite store");

                Ok(Self::from_store(store))
            }
            Backend::Json => {
                info!(data_dir = %config.data_dir.display(), "using json store");

                Ok(Self::from_store(JsonStore::new(&config.data_dir)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn from_config_opens_the_selected_backend() -> TestResult {
        let dir = tempfile::tempdir()?;

        let sqlite = AppContext::from_config(&StorageConfig {
            backend: Backend::Sqlite,
            database_url: "sqlite::memory:".to_string(),
            data_dir: dir.path().to_path_buf(),
        })
        .await?;

        let json = AppContext::from_config(&StorageConfig {
            backend: Backend::Json,
            database_url: "sqlite::memory:".to_string(),
            data_dir: dir.path().to_path_buf(),
        })
        .await?;

        assert!(sqlite.users.list_users().await?.is_empty(), "fresh sqlite");
        assert!(json.rooms.list_rooms().await?.is_empty(), "fresh json");

        Ok(())
    }

    #[tokio::test]
    async fn unusable_database_path_is_an_init_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let blocker = dir.path().join("blocker");

        std::fs::write(&blocker, "not a directory")?;

        let result = AppContext::from_config(&StorageConfig {
            backend: Backend::Sqlite,
            database_url: format!("sqlite://{}/hostel.db", blocker.display()),
            data_dir: dir.path().to_path_buf(),
        })
        .await;

        assert!(
            matches!(result, Err(AppInitError::Storage(_))),
            "expected storage error, got {result:?}"
        );

        Ok(())
    }
}
