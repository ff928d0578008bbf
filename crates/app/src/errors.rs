//! Error taxonomy shared by the domain services.

use std::fmt;

/// Broad classification of a service failure.
///
/// Every service error reports one of these through its `kind()` method so the
/// command surface can treat failures uniformly without matching on each
/// domain's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: email shape, short password, bad dates, past check-in.
    Validation,

    /// Uniqueness or mutual-exclusion violation.
    Conflict,

    /// A referenced user, room or booking does not exist.
    NotFound,

    /// The target exists but is not in a state that allows the operation.
    State,

    /// The backing store failed.
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validation => "validation error",
            Self::Conflict => "conflict",
            Self::NotFound => "not found",
            Self::State => "invalid state",
            Self::Storage => "storage error",
        })
    }
}
