//! User Data

use std::fmt;

use zeroize::Zeroizing;

/// Registration details as entered by the user.
#[derive(Clone)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Free-text phone number.
    pub phone: String,
    /// Plaintext password, wiped on drop.
    pub password: Zeroizing<String>,
}

impl Registration {
    /// Collect registration details.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New User Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Free-text phone number.
    pub phone: String,
    /// Hex-encoded password hash.
    pub password_hash: String,
}
