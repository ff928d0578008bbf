//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::users::{
    data::{NewUser, Registration},
    errors::UsersServiceError,
    password::{MIN_PASSWORD_CHARS, hash_password, verify_password},
    records::{UserId, UserRecord},
    repository::{UserLookup, UsersRepository},
};

/// Returns whether `email` has an `@` followed by a segment containing a `.`.
pub fn is_valid_email(email: &str) -> bool {
    email
        .split('@')
        .nth(1)
        .is_some_and(|domain| domain.contains('.'))
}

/// User directory backed by a [`UsersRepository`].
#[derive(Clone)]
pub struct UsersDirectory {
    repository: Arc<dyn UsersRepository>,
}

impl std::fmt::Debug for UsersDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersDirectory").finish_non_exhaustive()
    }
}

impl UsersDirectory {
    /// Directory over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersService for UsersDirectory {
    #[tracing::instrument(
        name = "users.service.create_user",
        skip(self, registration),
        fields(email = %registration.email),
        err
    )]
    async fn create_user(&self, registration: Registration) -> Result<UserRecord, UsersServiceError> {
        if !is_valid_email(&registration.email) {
            return Err(UsersServiceError::InvalidEmail);
        }

        if registration.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(UsersServiceError::PasswordTooShort {
                min: MIN_PASSWORD_CHARS,
            });
        }

        let existing = self
            .repository
            .find_user(UserLookup::Email(registration.email.clone()))
            .await?;

        if existing.is_some() {
            return Err(UsersServiceError::EmailTaken);
        }

        let user = self
            .repository
            .insert_user(NewUser {
                password_hash: hash_password(&registration.password),
                name: registration.name,
                email: registration.email,
                phone: registration.phone,
            })
            .await?;

        info!(user_id = %user.id, "registered user");

        Ok(user)
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, UsersServiceError> {
        let user = self
            .repository
            .find_user(UserLookup::Email(email.to_string()))
            .await?;

        Ok(user.filter(|user| verify_password(password, &user.password_hash)))
    }

    async fn get_user(&self, user: UserId) -> Result<Option<UserRecord>, UsersServiceError> {
        Ok(self.repository.find_user(UserLookup::Id(user)).await?)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, UsersServiceError> {
        Ok(self
            .repository
            .find_user(UserLookup::Email(email.to_string()))
            .await?)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError> {
        Ok(self.repository.find_users().await?)
    }
}

#[automock]
#[async_trait]
/// User registration, authentication and lookup.
pub trait UsersService: Send + Sync {
    /// Validates and registers a new user, storing only a hash of the password.
    async fn create_user(&self, registration: Registration) -> Result<UserRecord, UsersServiceError>;

    /// Returns the user when the email exists and the password matches.
    ///
    /// An unknown email and a wrong password are indistinguishable.
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, UsersServiceError>;

    /// Retrieve a user by ID.
    async fn get_user(&self, user: UserId) -> Result<Option<UserRecord>, UsersServiceError>;

    /// Retrieve a user by email.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, UsersServiceError>;

    /// Retrieve every user.
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError>;
}
