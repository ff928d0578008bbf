//! User Records

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// User ID
pub type UserId = TypedId<UserRecord>;

/// User Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Login email, unique across the store.
    pub email: String,

    /// Free-text phone number.
    pub phone: String,

    /// Hex-encoded one-way hash of the password.
    pub password_hash: String,
}
