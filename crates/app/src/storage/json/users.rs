use async_trait::async_trait;

use crate::{
    domain::users::{
        UserLookup, UsersRepository,
        data::NewUser,
        records::{UserId, UserRecord},
    },
    storage::{EMAIL_FIELD, JsonStore, StorageError},
};

use super::{Document, USERS_FILE, next_id};

impl Document for UserRecord {
    fn id(&self) -> i64 {
        self.id.into_inner()
    }
}

impl UserLookup {
    fn matches(&self, user: &UserRecord) -> bool {
        match self {
            Self::Id(id) => user.id == *id,
            Self::Email(email) => user.email == *email,
        }
    }
}

#[async_trait]
impl UsersRepository for JsonStore {
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut users: Vec<UserRecord> = self.load(USERS_FILE).await?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(StorageError::UniqueViolation(EMAIL_FIELD));
        }

        let record = UserRecord {
            id: UserId::new(next_id(&users)),
            name: user.name,
            email: user.email,
            phone: user.phone,
            password_hash: user.password_hash,
        };

        users.push(record.clone());

        self.save(USERS_FILE, &users).await?;

        Ok(record)
    }

    async fn find_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        self.load(USERS_FILE).await
    }

    async fn find_user(&self, lookup: UserLookup) -> Result<Option<UserRecord>, StorageError> {
        let users: Vec<UserRecord> = self.load(USERS_FILE).await?;

        Ok(users.into_iter().find(|user| lookup.matches(user)))
    }
}
