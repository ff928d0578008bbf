use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::info;

use crate::{
    context::AppContext,
    domain::{
        rooms::{data::NewRoom, records::RoomType},
        users::data::Registration,
    },
};

use super::{CliError, Console};

const DEMO_PASSWORD: &str = "Chelugui";

const DEMO_USERS: [(&str, &str, &str); 2] = [
    ("Brendah Chelugui", "brendachelugui@gmail.com", "+254712345678"),
    ("Erasmus Pkoskei", "pkosgei@gmail.com", "+254723456789"),
];

// (room numbers, type, capacity, nightly price in whole shillings)
const DEMO_ROOMS: [(&[&str], RoomType, u32, i64); 3] = [
    (&["101", "102", "103", "104"], RoomType::Single, 1, 2500),
    (&["201", "202", "203"], RoomType::Double, 2, 4000),
    (&["301", "302", "303"], RoomType::Dormitory, 4, 1500),
];

/// Insert the demo users and rooms.
///
/// Nothing is inserted when any demo email or room number is already taken.
pub(crate) async fn run<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    if already_seeded(ctx).await? {
        return Err(CliError::AlreadySeeded);
    }

    let mut users = Vec::with_capacity(DEMO_USERS.len());

    for (name, email, phone) in DEMO_USERS {
        users.push(
            ctx.users
                .create_user(Registration::new(name, email, phone, DEMO_PASSWORD))
                .await?,
        );
    }

    let mut created = 0;

    for (numbers, room_type, capacity, price) in DEMO_ROOMS {
        for number in numbers {
            ctx.rooms
                .create_room(NewRoom {
                    number: (*number).to_string(),
                    room_type,
                    capacity,
                    price_per_night: Decimal::from(price),
                })
                .await?;

            created += 1;
        }
    }

    info!(users = users.len(), rooms = created, "seeded demo data");

    console.say("Demo data created successfully!")?;

    let summary = users
        .iter()
        .map(|user| format!("{} (ID: {})", user.name, user.id))
        .collect::<Vec<_>>()
        .join(", ");

    console.say(format_args!("   Users: {summary}"))?;
    console.say(format_args!(
        "   Rooms: {created} rooms created (4 single, 3 double, 3 dormitory)"
    ))?;
    console.say("")?;
    console.say("   Demo login credentials:")?;

    for (_, email, _) in DEMO_USERS {
        console.say(format_args!("   - {email} / {DEMO_PASSWORD}"))?;
    }

    Ok(())
}

async fn already_seeded(ctx: &AppContext) -> Result<bool, CliError> {
    for (_, email, _) in DEMO_USERS {
        if ctx.users.get_user_by_email(email).await?.is_some() {
            return Ok(true);
        }
    }

    for (numbers, ..) in DEMO_ROOMS {
        for number in numbers {
            if ctx.rooms.get_room_by_number(number).await?.is_some() {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        cli::tests::run,
        domain::rooms::records::RoomType,
        test::TestContext,
    };

    async fn seeds_users_and_rooms(ctx: TestContext) -> TestResult {
        let out = run(&ctx, &["setup"], "").await?;

        assert!(out.contains("Demo data created successfully!"), "{out}");
        assert!(out.contains("Brendah Chelugui (ID: 1)"), "{out}");
        assert!(out.contains("10 rooms created"), "{out}");

        let rooms = ctx.rooms.list_rooms().await?;

        assert_eq!(rooms.len(), 10);
        assert_eq!(
            rooms
                .iter()
                .filter(|room| room.room_type == RoomType::Single)
                .count(),
            4
        );
        assert!(
            rooms
                .iter()
                .filter(|room| room.room_type == RoomType::Dormitory)
                .all(|room| room.capacity == 4 && room.price_per_night.to_string() == "1500.00"),
            "dormitories seeded"
        );
        assert!(
            ctx.users
                .authenticate("brendachelugui@gmail.com", "Chelugui")
                .await?
                .is_some(),
            "demo login works"
        );

        Ok(())
    }

    #[tokio::test]
    async fn seeds_users_and_rooms_sqlite() -> TestResult {
        seeds_users_and_rooms(TestContext::new().await?).await
    }

    #[tokio::test]
    async fn seeds_users_and_rooms_json() -> TestResult {
        seeds_users_and_rooms(TestContext::json()?).await
    }

    #[tokio::test]
    async fn second_setup_reports_duplicate() -> TestResult {
        let ctx = TestContext::new().await?;

        run(&ctx, &["setup"], "").await?;

        let again = run(&ctx, &["setup"], "").await?;

        assert!(again.contains("Error: Demo data already exists"), "{again}");
        assert_eq!(ctx.rooms.list_rooms().await?.len(), 10);

        Ok(())
    }

    #[tokio::test]
    async fn existing_demo_room_leaves_store_untouched() -> TestResult {
        let ctx = TestContext::new().await?;

        run(
            &ctx,
            &[
                "room", "create", "--number", "303", "--type", "dormitory", "--capacity", "4",
                "--price", "1500",
            ],
            "",
        )
        .await?;

        let out = run(&ctx, &["setup"], "").await?;

        assert!(out.contains("Error: Demo data already exists"), "{out}");
        assert!(ctx.users.list_users().await?.is_empty(), "no demo users inserted");
        assert_eq!(ctx.rooms.list_rooms().await?.len(), 1);

        Ok(())
    }
}
