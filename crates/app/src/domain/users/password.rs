//! Password hashing.

use sha2::{Digest, Sha256};

/// Minimum accepted password length, in characters.
pub(crate) const MIN_PASSWORD_CHARS: usize = 6;

pub(crate) fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

pub(crate) fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password) == password_hash
}
