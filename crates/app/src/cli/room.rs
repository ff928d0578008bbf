use std::io::{BufRead, Write};

use clap::{ArgAction, Args, Subcommand};
use rust_decimal::Decimal;

use crate::{
    context::AppContext,
    domain::rooms::{
        data::NewRoom,
        records::{RoomId, RoomType},
    },
};

use super::{CliError, Console, display};

#[derive(Debug, Args)]
pub(crate) struct RoomCommand {
    #[command(subcommand)]
    command: RoomSubcommand,
}

#[derive(Debug, Subcommand)]
enum RoomSubcommand {
    /// Create a new room
    Create(CreateRoomArgs),

    /// List rooms
    List(ListRoomsArgs),

    /// Mark a room as available or unavailable
    SetAvailability(SetAvailabilityArgs),
}

#[derive(Debug, Args)]
struct CreateRoomArgs {
    /// Room number; prompted when omitted
    #[arg(long)]
    number: Option<String>,

    /// Room type; prompted when omitted
    #[arg(long = "type", value_enum)]
    room_type: Option<RoomType>,

    /// Maximum number of guests; prompted when omitted
    #[arg(long)]
    capacity: Option<u32>,

    /// Price per night; prompted when omitted
    #[arg(long)]
    price: Option<Decimal>,
}

#[derive(Debug, Args)]
struct ListRoomsArgs {
    /// Show only available rooms
    #[arg(long)]
    available_only: bool,
}

#[derive(Debug, Args)]
struct SetAvailabilityArgs {
    /// Room ID
    #[arg(long)]
    room_id: i64,

    /// New availability (true, false)
    #[arg(long, action = ArgAction::Set)]
    available: bool,
}

pub(crate) async fn run<R: BufRead, W: Write>(
    command: RoomCommand,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    match command.command {
        RoomSubcommand::Create(args) => create(args, ctx, console).await,
        RoomSubcommand::List(args) => list(args, ctx, console).await,
        RoomSubcommand::SetAvailability(args) => set_availability(args, ctx, console).await,
    }
}

async fn create<R: BufRead, W: Write>(
    args: CreateRoomArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let number = console.value_or_prompt(args.number, "Room number")?;
    let room_type = console.parsed_or_prompt(
        args.room_type,
        "Room type (single, double, dormitory)",
        "Invalid room type. Use single, double or dormitory.",
    )?;
    let capacity = console.parsed_or_prompt(args.capacity, "Capacity", "Invalid capacity.")?;
    let price_per_night =
        console.parsed_or_prompt(args.price, "Price per night", "Invalid price.")?;

    let room = ctx
        .rooms
        .create_room(NewRoom {
            number,
            room_type,
            capacity,
            price_per_night,
        })
        .await?;

    console.say(format_args!("Room created successfully! ID: {}", room.id))
}

async fn list<R: BufRead, W: Write>(
    args: ListRoomsArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let rooms = if args.available_only {
        ctx.rooms.list_available_rooms().await?
    } else {
        ctx.rooms.list_rooms().await?
    };

    if rooms.is_empty() {
        return console.say("No rooms found.");
    }

    display::write_rooms(console.output(), &rooms, true)?;

    Ok(())
}

async fn set_availability<R: BufRead, W: Write>(
    args: SetAvailabilityArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let room = RoomId::new(args.room_id);

    if !ctx.rooms.set_availability(room, args.available).await? {
        return console.say(format_args!("Room {room} not found."));
    }

    let state = if args.available {
        "available"
    } else {
        "unavailable"
    };

    console.say(format_args!("Room {room} is now {state}."))
}
