//! Command-line surface: one-shot commands and the interactive menu.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::warn;

use crate::{
    config::AppConfig,
    context::AppContext,
    dates::DateFormatError,
    domain::{
        bookings::BookingsServiceError, rooms::RoomsServiceError, users::UsersServiceError,
    },
};

pub use clock::{Clock, SystemClock};
pub use console::Console;

mod booking;
mod clock;
mod console;
mod display;
mod menu;
mod room;
mod setup;
mod user;

/// Hostel booking system
#[derive(Debug, Parser)]
#[command(name = "hostel", about = "Hostel booking system", long_about = None)]
pub struct Cli {
    /// Storage and logging settings.
    #[command(flatten)]
    pub config: AppConfig,

    /// Runs the interactive menu when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// User management commands
    User(user::UserCommand),

    /// Room management commands
    Room(room::RoomCommand),

    /// Booking management commands
    Booking(booking::BookingCommand),

    /// Seed demo users and rooms
    Setup,
}

/// Failures while running a command.
///
/// Only [`CliError::is_fatal`] errors end the program; the rest are reported
/// to the operator as `Error: <message>`.
#[derive(Debug, Error)]
pub enum CliError {
    /// A user operation failed.
    #[error(transparent)]
    Users(#[from] UsersServiceError),

    /// A room operation failed.
    #[error(transparent)]
    Rooms(#[from] RoomsServiceError),

    /// A booking operation failed.
    #[error(transparent)]
    Bookings(#[from] BookingsServiceError),

    /// A date was not `YYYY-MM-DD`.
    #[error(transparent)]
    Date(#[from] DateFormatError),

    /// An answer could not be parsed; carries the message to show.
    #[error("{0}")]
    Input(&'static str),

    /// The demo users or rooms are already present.
    #[error("Demo data already exists")]
    AlreadySeeded,

    /// Input ran out while a prompt was waiting.
    #[error("input ended")]
    EndOfInput,

    /// Reading input or writing output failed.
    #[error("failed to write output")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Whether the error should end the program instead of being reported.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::EndOfInput)
    }
}

impl Cli {
    /// Run the selected command, or the interactive menu when none was given.
    ///
    /// `clock` is read for each new booking; check-in dates before it are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error only when the console itself fails; command failures
    /// are reported on the console.
    pub async fn run<R: BufRead, W: Write>(
        self,
        ctx: &AppContext,
        console: &mut Console<R, W>,
        clock: &dyn Clock,
    ) -> Result<(), CliError> {
        let result = match self.command {
            None => return menu::run(ctx, console, clock).await,
            Some(Command::User(command)) => user::run(command, ctx, console).await,
            Some(Command::Room(command)) => room::run(command, ctx, console).await,
            Some(Command::Booking(command)) => booking::run(command, ctx, console, clock).await,
            Some(Command::Setup) => setup::run(ctx, console).await,
        };

        report(console, result)
    }
}

/// Print a recoverable failure and carry on; pass fatal ones through.
fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: Result<(), CliError>,
) -> Result<(), CliError> {
    match result {
        Err(error) if !error.is_fatal() => {
            warn!(%error, "command failed");

            console.say(format_args!("Error: {error}"))
        }
        other => other,
    }
}
