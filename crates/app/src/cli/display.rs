//! Tables and money formatting for command output.

use std::io;

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::domain::{
    bookings::{Stay, records::BookingRecord},
    rooms::records::RoomRecord,
    users::records::UserRecord,
};

/// Format an amount in Kenyan shillings.
#[must_use]
pub fn money(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::KES).to_string()
}

/// Calendar date of a stored date-time.
#[must_use]
pub fn day(value: DateTime) -> String {
    value.date().to_string()
}

/// Whole nights between check-in and check-out.
#[must_use]
pub fn nights(booking: &BookingRecord) -> i64 {
    Stay::new(booking.check_in, booking.check_out).map_or(0, |stay| stay.nights())
}

/// A booking row with the names of the records it references, when known.
#[derive(Debug)]
pub struct BookingRow<'a> {
    pub booking: &'a BookingRecord,
    pub user: Option<&'a UserRecord>,
    pub room: Option<&'a RoomRecord>,
}

fn write_table(out: &mut impl io::Write, builder: Builder, right: &[usize]) -> io::Result<()> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());

    for &column in right {
        table.modify(Columns::new(column..=column), Alignment::right());
    }

    writeln!(out, "{table}")
}

pub fn write_users(out: &mut impl io::Write, users: &[UserRecord]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Email", "Phone"]);

    for user in users {
        builder.push_record([
            user.id.to_string(),
            user.name.clone(),
            user.email.clone(),
            user.phone.clone(),
        ]);
    }

    write_table(out, builder, &[0])
}

/// Room table; the availability column is included when `with_availability`.
pub fn write_rooms(
    out: &mut impl io::Write,
    rooms: &[RoomRecord],
    with_availability: bool,
) -> io::Result<()> {
    let mut builder = Builder::default();

    let mut header = vec!["ID", "Number", "Type", "Capacity", "Price/Night"];

    if with_availability {
        header.push("Available");
    }

    builder.push_record(header);

    for room in rooms {
        let mut record = vec![
            room.id.to_string(),
            room.number.clone(),
            room.room_type.to_string(),
            room.capacity.to_string(),
            money(room.price_per_night),
        ];

        if with_availability {
            record.push(if room.is_available { "yes" } else { "no" }.to_string());
        }

        builder.push_record(record);
    }

    write_table(out, builder, &[0, 3, 4])
}

/// Booking table; the guest column is included when `with_user`.
pub fn write_bookings(
    out: &mut impl io::Write,
    rows: &[BookingRow<'_>],
    with_user: bool,
) -> io::Result<()> {
    let mut builder = Builder::default();

    let mut header = vec!["ID"];

    if with_user {
        header.push("User");
    }

    header.extend(["Room", "Check-in", "Check-out", "Total", "Status"]);

    builder.push_record(header);

    for row in rows {
        let mut record = vec![row.booking.id.to_string()];

        if with_user {
            record.push(row.user.map_or_else(|| "Unknown".to_string(), |user| user.name.clone()));
        }

        record.extend([
            row.room
                .map_or_else(|| "Unknown".to_string(), |room| room.number.clone()),
            day(row.booking.check_in),
            day(row.booking.check_out),
            money(row.booking.total_price),
            row.booking.status.to_string(),
        ]);

        builder.push_record(record);
    }

    let total_column = if with_user { 5 } else { 4 };

    write_table(out, builder, &[0, total_column])
}

/// Multi-line description of a single booking.
pub fn write_booking_details(out: &mut impl io::Write, row: &BookingRow<'_>) -> io::Result<()> {
    let booking = row.booking;

    writeln!(out, "Booking Details (ID: {})", booking.id)?;
    writeln!(
        out,
        "   User: {} ({})",
        row.user.map_or("Unknown", |user| user.name.as_str()),
        row.user.map_or("N/A", |user| user.email.as_str()),
    )?;
    writeln!(
        out,
        "   Room: {} ({})",
        row.room.map_or("Unknown", |room| room.number.as_str()),
        row.room.map_or("N/A", |room| room.room_type.as_str()),
    )?;
    writeln!(out, "   Check-in: {}", day(booking.check_in))?;
    writeln!(out, "   Check-out: {}", day(booking.check_out))?;
    writeln!(out, "   Nights: {}", nights(booking))?;
    writeln!(out, "   Total Price: {}", money(booking.total_price))?;
    writeln!(out, "   Status: {}", booking.status)
}
