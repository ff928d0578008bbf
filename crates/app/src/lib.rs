//! Hostel booking system.
//!
//! Users, a room inventory and a booking ledger with overlap checks and
//! nightly pricing, persisted in `SQLite` or flat `JSON` files and driven from a
//! command line or an interactive menu.

pub mod cli;
pub mod config;
pub mod context;
pub mod dates;
pub mod domain;
pub mod errors;
pub mod ids;
pub mod observability;
pub mod storage;

#[cfg(test)]
mod test;
