//! Users Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::users::{
        data::NewUser,
        records::{UserId, UserRecord},
    },
    storage::StorageError,
};

/// Single-user lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    /// By store-assigned identifier.
    Id(UserId),
    /// By login email.
    Email(String),
}

#[automock]
#[async_trait]
/// User persistence operations.
pub trait UsersRepository: Send + Sync {
    /// Stores a new user and returns it with its assigned ID.
    ///
    /// Fails with [`StorageError::UniqueViolation`] when the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StorageError>;

    /// Returns every user in ID order.
    async fn find_users(&self) -> Result<Vec<UserRecord>, StorageError>;

    /// Returns the first user matching the lookup.
    async fn find_user(&self, lookup: UserLookup) -> Result<Option<UserRecord>, StorageError>;
}
