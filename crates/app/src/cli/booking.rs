use std::io::{BufRead, Write};

use clap::{Args, Subcommand};
use jiff::civil::DateTime;

use crate::{
    context::AppContext,
    dates::{DATE_FORMAT, parse_date},
    domain::{
        bookings::{
            data::BookingRequest,
            records::{BookingId, BookingRecord},
        },
        rooms::records::RoomId,
        users::records::UserId,
    },
};

use super::{
    CliError, Clock, Console,
    display::{self, BookingRow},
};

#[derive(Debug, Args)]
pub(crate) struct BookingCommand {
    #[command(subcommand)]
    command: BookingSubcommand,
}

#[derive(Debug, Subcommand)]
enum BookingSubcommand {
    /// Create a new booking
    Create(CreateBookingArgs),

    /// Cancel a booking
    Cancel(BookingIdArgs),

    /// List bookings
    List(ListBookingsArgs),

    /// Show booking details
    Details(BookingIdArgs),
}

#[derive(Debug, Args)]
struct CreateBookingArgs {
    /// Guest user ID; prompted when omitted
    #[arg(long)]
    user_id: Option<i64>,

    /// Room ID; prompted when omitted
    #[arg(long)]
    room_id: Option<i64>,

    /// Check-in date (YYYY-MM-DD); prompted when omitted
    #[arg(long)]
    check_in: Option<String>,

    /// Check-out date (YYYY-MM-DD); prompted when omitted
    #[arg(long)]
    check_out: Option<String>,
}

#[derive(Debug, Args)]
struct BookingIdArgs {
    /// Booking ID; prompted when omitted
    #[arg(long)]
    booking_id: Option<i64>,
}

#[derive(Debug, Args)]
struct ListBookingsArgs {
    /// Only show bookings made by this user
    #[arg(long)]
    user_id: Option<i64>,
}

pub(crate) async fn run<R: BufRead, W: Write>(
    command: BookingCommand,
    ctx: &AppContext,
    console: &mut Console<R, W>,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    match command.command {
        BookingSubcommand::Create(args) => create(args, ctx, console, clock).await,
        BookingSubcommand::Cancel(args) => cancel(args, ctx, console).await,
        BookingSubcommand::List(args) => list(args, ctx, console).await,
        BookingSubcommand::Details(args) => details(args, ctx, console).await,
    }
}

/// Read the stay dates, prompting for whichever is missing.
pub(super) fn stay_dates<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    check_in: Option<String>,
    check_out: Option<String>,
) -> Result<(DateTime, DateTime), CliError> {
    let check_in = console.value_or_prompt(check_in, &format!("Check-in date ({DATE_FORMAT})"))?;
    let check_out =
        console.value_or_prompt(check_out, &format!("Check-out date ({DATE_FORMAT})"))?;

    Ok((parse_date(&check_in)?, parse_date(&check_out)?))
}

/// Book a stay and print its summary.
pub(super) async fn book<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    request: BookingRequest,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    let booking = ctx.bookings.create_booking(request, clock.now()).await?;

    console.say("Booking created successfully!")?;
    console.say(format_args!("   Booking ID: {}", booking.id))?;
    console.say(format_args!(
        "   Total Price: {}",
        display::money(booking.total_price)
    ))?;
    console.say(format_args!("   Nights: {}", display::nights(&booking)))
}

/// Render `bookings` with their guests' names and room numbers.
pub(super) async fn write_bookings<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    bookings: &[BookingRecord],
    with_user: bool,
) -> Result<(), CliError> {
    let users = ctx.users.list_users().await?;
    let rooms = ctx.rooms.list_rooms().await?;

    let rows: Vec<BookingRow<'_>> = bookings
        .iter()
        .map(|booking| BookingRow {
            booking,
            user: users.iter().find(|user| user.id == booking.user_id),
            room: rooms.iter().find(|room| room.id == booking.room_id),
        })
        .collect();

    display::write_bookings(console.output(), &rows, with_user)?;

    Ok(())
}

async fn create<R: BufRead, W: Write>(
    args: CreateBookingArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    let user_id = console.parsed_or_prompt(args.user_id, "User ID", "Invalid user ID.")?;
    let room_id = console.parsed_or_prompt(args.room_id, "Room ID", "Invalid room ID.")?;
    let (check_in, check_out) = stay_dates(console, args.check_in, args.check_out)?;

    book(
        ctx,
        console,
        BookingRequest {
            user_id: UserId::new(user_id),
            room_id: RoomId::new(room_id),
            check_in,
            check_out,
        },
        clock,
    )
    .await
}

async fn cancel<R: BufRead, W: Write>(
    args: BookingIdArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let booking = BookingId::new(console.parsed_or_prompt(
        args.booking_id,
        "Booking ID",
        "Invalid booking ID.",
    )?);

    if ctx.bookings.cancel_booking(booking).await? {
        console.say(format_args!("Booking {booking} cancelled successfully!"))
    } else {
        console.say(format_args!("Booking {booking} not found."))
    }
}

async fn list<R: BufRead, W: Write>(
    args: ListBookingsArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let bookings = match args.user_id {
        Some(user) => ctx.bookings.list_user_bookings(UserId::new(user)).await?,
        None => ctx.bookings.list_bookings().await?,
    };

    if bookings.is_empty() {
        return console.say("No bookings found.");
    }

    write_bookings(ctx, console, &bookings, true).await
}

async fn details<R: BufRead, W: Write>(
    args: BookingIdArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let id = BookingId::new(console.parsed_or_prompt(
        args.booking_id,
        "Booking ID",
        "Invalid booking ID.",
    )?);

    let Some(booking) = ctx.bookings.get_booking(id).await? else {
        return console.say(format_args!("Booking {id} not found."));
    };

    let user = ctx.users.get_user(booking.user_id).await?;
    let room = ctx.rooms.get_room(booking.room_id).await?;

    display::write_booking_details(
        console.output(),
        &BookingRow {
            booking: &booking,
            user: user.as_ref(),
            room: room.as_ref(),
        },
    )?;

    Ok(())
}
