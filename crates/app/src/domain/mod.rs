//! Hostel Domain Concerns

pub mod bookings;
pub mod rooms;
pub mod users;
