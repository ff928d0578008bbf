use std::io::{BufRead, Write};

use clap::{Args, Subcommand};
use zeroize::Zeroizing;

use crate::{context::AppContext, domain::users::data::Registration};

use super::{CliError, Console, display};

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Create a new user
    Create(CreateUserArgs),

    /// Check a user's credentials
    Login(LoginArgs),

    /// List all users
    List,
}

#[derive(Debug, Args)]
struct CreateUserArgs {
    /// User name; prompted when omitted
    #[arg(long)]
    name: Option<String>,

    /// User email; prompted when omitted
    #[arg(long)]
    email: Option<String>,

    /// User phone number; prompted when omitted
    #[arg(long)]
    phone: Option<String>,

    /// User password; prompted twice when omitted
    #[arg(long)]
    password: Option<String>,
}

#[derive(Debug, Args)]
struct LoginArgs {
    /// User email; prompted when omitted
    #[arg(long)]
    email: Option<String>,

    /// User password; prompted when omitted
    #[arg(long)]
    password: Option<String>,
}

pub(crate) async fn run<R: BufRead, W: Write>(
    command: UserCommand,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    match command.command {
        UserSubcommand::Create(args) => create(args, ctx, console).await,
        UserSubcommand::Login(args) => login(args, ctx, console).await,
        UserSubcommand::List => list(ctx, console).await,
    }
}

async fn create<R: BufRead, W: Write>(
    args: CreateUserArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let name = console.value_or_prompt(args.name, "Name")?;
    let email = console.value_or_prompt(args.email, "Email")?;
    let phone = console.value_or_prompt(args.phone, "Phone")?;
    let password = match args.password {
        Some(password) => Zeroizing::new(password),
        None => console.new_password()?,
    };

    let user = ctx
        .users
        .create_user(Registration::new(name, email, phone, password.as_str()))
        .await?;

    console.say(format_args!("User created successfully! ID: {}", user.id))
}

async fn login<R: BufRead, W: Write>(
    args: LoginArgs,
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let email = console.value_or_prompt(args.email, "Email")?;
    let password = match args.password {
        Some(password) => Zeroizing::new(password),
        None => console.secret("Password")?,
    };

    match ctx.users.authenticate(&email, password.as_str()).await? {
        Some(user) => console.say(format_args!("Login successful! Welcome, {}", user.name)),
        None => console.say("Invalid email or password"),
    }
}

async fn list<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let users = ctx.users.list_users().await?;

    if users.is_empty() {
        return console.say("No users found.");
    }

    display::write_users(console.output(), &users)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{cli::tests::run, test::TestContext};

    #[tokio::test]
    async fn create_prompts_for_missing_fields() -> TestResult {
        let ctx = TestContext::new().await?;

        let out = run(
            &ctx,
            &["user", "create", "--name", "Alice"],
            "alice@example.com\n+254700000001\nsecret1\nsecret1\n",
        )
        .await?;

        assert!(out.contains("Email: "), "{out}");
        assert!(out.contains("User created successfully! ID: 1"), "{out}");
        assert!(
            ctx.users
                .authenticate("alice@example.com", "secret1")
                .await?
                .is_some(),
            "prompted password was stored"
        );

        Ok(())
    }

    #[tokio::test]
    async fn login_reports_success_and_failure_alike_for_unknown_accounts() -> TestResult {
        let ctx = TestContext::new().await?;

        run(&ctx, &["setup"], "").await?;

        let ok = run(
            &ctx,
            &[
                "user",
                "login",
                "--email",
                "pkosgei@gmail.com",
                "--password",
                "Chelugui",
            ],
            "",
        )
        .await?;

        let wrong = run(
            &ctx,
            &["user", "login", "--email", "pkosgei@gmail.com"],
            "nope\n",
        )
        .await?;

        let unknown = run(
            &ctx,
            &[
                "user",
                "login",
                "--email",
                "ghost@example.com",
                "--password",
                "Chelugui",
            ],
            "",
        )
        .await?;

        assert!(ok.contains("Welcome, Erasmus Pkoskei"), "{ok}");
        assert!(wrong.contains("Invalid email or password"), "{wrong}");
        assert!(unknown.contains("Invalid email or password"), "{unknown}");

        Ok(())
    }

    #[tokio::test]
    async fn list_shows_table_or_empty_message() -> TestResult {
        let ctx = TestContext::new().await?;

        let empty = run(&ctx, &["user", "list"], "").await?;

        run(&ctx, &["setup"], "").await?;

        let listed = run(&ctx, &["user", "list"], "").await?;

        assert!(empty.contains("No users found."), "{empty}");
        assert!(listed.contains("brendachelugui@gmail.com"), "{listed}");
        assert!(listed.contains("+254723456789"), "{listed}");

        Ok(())
    }
}
