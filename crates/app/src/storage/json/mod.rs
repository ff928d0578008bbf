//! Document backend: one pretty-printed JSON array per collection.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tracing::debug;

use crate::storage::StorageError;

mod bookings;
mod rooms;
mod users;

const USERS_FILE: &str = "users.json";
const ROOMS_FILE: &str = "rooms.json";
const BOOKINGS_FILE: &str = "bookings.json";

/// Records stored in a collection file.
trait Document: Serialize + DeserializeOwned {
    fn id(&self) -> i64;
}

/// JSON-file store implementing every repository trait.
///
/// A missing file reads as an empty collection. A file that does not parse is
/// an error, never an empty collection, so a later write cannot clobber it.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,

    // Serializes read-modify-write cycles across all collections.
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Store rooted at `data_dir`; nothing is read until first use.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Directory holding the collection files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load every record in `file`, sorted by ID.
    async fn load<T: Document>(&self, file: &str) -> Result<Vec<T>, StorageError> {
        let path = self.path(file);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let mut records: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|source| StorageError::Json { path, source })?;

        records.sort_by_key(Document::id);

        Ok(records)
    }

    /// Replace the contents of `file` with `records`.
    ///
    /// The new contents are written beside the target and renamed over it, so
    /// readers never observe a partially written file.
    async fn save<T: Document>(&self, file: &str, records: &[T]) -> Result<(), StorageError> {
        let path = self.path(file);

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StorageError::Io {
                path: self.data_dir.clone(),
                source,
            })?;

        let json = serde_json::to_vec_pretty(records).map_err(|source| StorageError::Json {
            path: path.clone(),
            source,
        })?;

        let staging = path.with_extension("json.tmp");

        tokio::fs::write(&staging, json)
            .await
            .map_err(|source| StorageError::Io {
                path: staging.clone(),
                source,
            })?;

        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), records = records.len(), "wrote collection");

        Ok(())
    }
}

/// Next free identifier: one past the largest in use, starting at 1.
fn next_id<T: Document>(records: &[T]) -> i64 {
    records.iter().map(Document::id).max().map_or(1, |id| id + 1)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        rooms::{RoomFilter, RoomsRepository, data::NewRoom, records::RoomType},
        users::{UserLookup, UsersRepository, data::NewUser},
    };

    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Guest".to_string(),
            email: email.to_string(),
            phone: "+254700000000".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_files_read_as_empty_collections() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = JsonStore::new(dir.path().join("not-yet-created"));

        assert!(store.find_users().await?.is_empty(), "no users");
        assert!(
            store.find_rooms(RoomFilter::default()).await?.is_empty(),
            "no rooms"
        );

        Ok(())
    }

    #[tokio::test]
    async fn first_write_creates_the_data_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        let data_dir = dir.path().join("data");
        let store = JsonStore::new(&data_dir);

        store.insert_user(new_user("a@example.com")).await?;

        assert!(data_dir.join(USERS_FILE).exists(), "users.json written");
        assert!(!data_dir.join("users.json.tmp").exists(), "staging file renamed");

        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_is_an_error_not_an_empty_collection() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(USERS_FILE), "{ not json")?;

        let store = JsonStore::new(dir.path());

        let read = store.find_users().await;
        let write = store.insert_user(new_user("a@example.com")).await;

        assert!(
            matches!(read, Err(StorageError::Json { .. })),
            "expected Json error, got {read:?}"
        );
        assert!(
            matches!(write, Err(StorageError::Json { .. })),
            "expected Json error, got {write:?}"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join(USERS_FILE))?,
            "{ not json",
            "file left untouched"
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_file_reads_as_empty() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(USERS_FILE), "\n")?;

        let store = JsonStore::new(dir.path());

        assert!(store.find_users().await?.is_empty(), "blank file is empty");

        Ok(())
    }

    #[tokio::test]
    async fn files_are_pretty_printed_with_text_prices() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = JsonStore::new(dir.path());

        store
            .insert_room(NewRoom {
                number: "101".to_string(),
                room_type: RoomType::Single,
                capacity: 1,
                price_per_night: rust_decimal::Decimal::new(250_000, 2),
            })
            .await?;

        let raw = std::fs::read_to_string(dir.path().join(ROOMS_FILE))?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;

        assert!(raw.contains('\n'), "pretty printed");
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["room_type"], "single");
        assert_eq!(value[0]["price_per_night"], "2500.00");
        assert_eq!(value[0]["is_available"], true);

        Ok(())
    }

    #[tokio::test]
    async fn ids_continue_past_the_largest_existing_id() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join(USERS_FILE),
            r#"[{"id": 7, "name": "Old", "email": "old@example.com", "phone": "", "password_hash": "x"}]"#,
        )?;

        let store = JsonStore::new(dir.path());

        let user = store.insert_user(new_user("new@example.com")).await?;

        assert_eq!(user.id.into_inner(), 8);
        assert_eq!(
            store
                .find_user(UserLookup::Email("old@example.com".to_string()))
                .await?
                .map(|user| user.name),
            Some("Old".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn data_survives_reopening_the_store() -> TestResult {
        let dir = tempfile::tempdir()?;

        let created = JsonStore::new(dir.path())
            .insert_user(new_user("a@example.com"))
            .await?;

        let reopened = JsonStore::new(dir.path());

        assert_eq!(reopened.find_users().await?, vec![created]);

        Ok(())
    }
}
