//! Users

pub mod data;
pub mod errors;
mod password;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::UsersServiceError;
pub use repository::*;
pub use service::*;
