//! Interactive menus.
//!
//! The main menu handles registration and login; a successful login opens a
//! [`Session`] menu scoped to that user until they log out.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    context::AppContext,
    domain::{
        bookings::{data::BookingRequest, records::BookingId},
        rooms::records::RoomId,
        users::{data::Registration, records::UserRecord},
    },
};

use super::{CliError, Clock, Console, booking, display, report};

/// The logged-in user, threaded through every session action.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    user: UserRecord,
}

impl Session {
    pub(crate) fn new(user: UserRecord) -> Self {
        Self { user }
    }
}

/// Run the main menu until the operator exits or input runs out.
pub(crate) async fn run<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    match main_menu(ctx, console, clock).await {
        Err(CliError::EndOfInput) => {
            debug!("input ended, leaving menu");

            Ok(())
        }
        other => other,
    }
}

async fn main_menu<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    loop {
        console.say("")?;
        console.say("=== HOSTEL BOOKING SYSTEM ===")?;
        console.say("1. Register")?;
        console.say("2. Login")?;
        console.say("3. Exit")?;

        match choice(console)? {
            Some(1) => {
                let result = register(ctx, console).await;
                report(console, result)?;
            }
            Some(2) => {
                let result = login(ctx, console).await;

                if let Some(session) = report_value(console, result)?.flatten() {
                    session_menu(ctx, console, &session, clock).await?;
                }
            }
            Some(3) => return console.say("Goodbye!"),
            _ => console.say("Invalid choice. Please try again.")?,
        }
    }
}

async fn session_menu<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    session: &Session,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    loop {
        console.say("")?;
        console.say(format_args!(
            "=== WELCOME {} ===",
            session.user.name.to_uppercase()
        ))?;
        console.say("1. View Available Rooms")?;
        console.say("2. Make Booking")?;
        console.say("3. View My Bookings")?;
        console.say("4. Cancel Booking")?;
        console.say("5. Logout")?;

        let result = match choice(console)? {
            Some(1) => available_rooms(ctx, console).await,
            Some(2) => make_booking(ctx, console, session, clock).await,
            Some(3) => my_bookings(ctx, console, session).await,
            Some(4) => cancel_booking(ctx, console, session).await,
            Some(5) => return console.say("Logged out successfully!"),
            _ => console.say("Invalid choice. Please try again."),
        };

        report(console, result)?;
    }
}

/// Read a menu choice; `None` when the answer is not a number.
fn choice<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<u8>, CliError> {
    Ok(console.prompt("Choose")?.parse().ok())
}

/// Like [`report`], but keeps the successful value.
fn report_value<R: BufRead, W: Write, T>(
    console: &mut Console<R, W>,
    result: Result<T, CliError>,
) -> Result<Option<T>, CliError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) => report(console, Err(error)).map(|()| None),
    }
}

async fn register<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let name = console.prompt("Name")?;
    let email = console.prompt("Email")?;
    let phone = console.prompt("Phone")?;
    let password = console.new_password()?;

    let user = ctx
        .users
        .create_user(Registration::new(name, email, phone, password.as_str()))
        .await?;

    console.say(format_args!("User registered successfully! ID: {}", user.id))
}

async fn login<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<Option<Session>, CliError> {
    let email = console.prompt("Email")?;
    let password = console.secret("Password")?;

    let Some(user) = ctx.users.authenticate(&email, password.as_str()).await? else {
        console.say("Invalid email or password")?;

        return Ok(None);
    };

    console.say(format_args!("Login successful! Welcome, {}", user.name))?;

    Ok(Some(Session::new(user)))
}

async fn available_rooms<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let rooms = ctx.rooms.list_available_rooms().await?;

    if rooms.is_empty() {
        return console.say("No available rooms.");
    }

    display::write_rooms(console.output(), &rooms, false)?;

    Ok(())
}

async fn make_booking<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    session: &Session,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    available_rooms(ctx, console).await?;

    let room_id: i64 = console.prompt_parsed("Room ID", "Invalid room ID.")?;
    let (check_in, check_out) = booking::stay_dates(console, None, None)?;

    booking::book(
        ctx,
        console,
        BookingRequest {
            user_id: session.user.id,
            room_id: RoomId::new(room_id),
            check_in,
            check_out,
        },
        clock,
    )
    .await
}

async fn my_bookings<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    session: &Session,
) -> Result<(), CliError> {
    let bookings = ctx.bookings.list_user_bookings(session.user.id).await?;

    if bookings.is_empty() {
        return console.say("No bookings found.");
    }

    booking::write_bookings(ctx, console, &bookings, false).await
}

async fn cancel_booking<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    session: &Session,
) -> Result<(), CliError> {
    my_bookings(ctx, console, session).await?;

    let id = BookingId::new(console.prompt_parsed("Booking ID to cancel", "Invalid booking ID.")?);

    let owned = ctx
        .bookings
        .get_booking(id)
        .await?
        .is_some_and(|booking| booking.user_id == session.user.id);

    if !owned {
        return console.say("Booking not found or not yours.");
    }

    if ctx.bookings.cancel_booking(id).await? {
        console.say(format_args!("Booking {id} cancelled successfully!"))
    } else {
        console.say("Failed to cancel booking.")
    }
}
