use async_trait::async_trait;
use sqlx::{FromRow, Row, query_as, sqlite::SqliteRow};

use crate::{
    domain::users::{
        UserLookup, UsersRepository,
        data::NewUser,
        records::{UserId, UserRecord},
    },
    storage::{SqliteStore, StorageError},
};

const INSERT_USER_SQL: &str = include_str!("sql/insert_user.sql");
const FIND_USERS_SQL: &str = include_str!("sql/find_users.sql");
const FIND_USER_BY_ID_SQL: &str = include_str!("sql/find_user_by_id.sql");
const FIND_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_user_by_email.sql");

#[async_trait]
impl UsersRepository for SqliteStore {
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StorageError> {
        Ok(query_as::<_, UserRecord>(INSERT_USER_SQL)
            .bind(user.name)
            .bind(user.email)
            .bind(user.phone)
            .bind(user.password_hash)
            .fetch_one(self.pool())
            .await?)
    }

    async fn find_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        Ok(query_as::<_, UserRecord>(FIND_USERS_SQL)
            .fetch_all(self.pool())
            .await?)
    }

    async fn find_user(&self, lookup: UserLookup) -> Result<Option<UserRecord>, StorageError> {
        let user = match lookup {
            UserLookup::Id(id) => {
                query_as::<_, UserRecord>(FIND_USER_BY_ID_SQL)
                    .bind(id.into_inner())
                    .fetch_optional(self.pool())
                    .await?
            }
            UserLookup::Email(email) => {
                query_as::<_, UserRecord>(FIND_USER_BY_EMAIL_SQL)
                    .bind(email)
                    .fetch_optional(self.pool())
                    .await?
            }
        };

        Ok(user)
    }
}

impl<'r> FromRow<'r, SqliteRow> for UserRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: UserId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}
