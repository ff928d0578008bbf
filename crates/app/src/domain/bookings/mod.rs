//! Bookings

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;
pub mod stay;

pub use errors::BookingsServiceError;
pub use repository::*;
pub use service::*;
pub use stay::Stay;
