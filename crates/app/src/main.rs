//! Hostel booking system command-line entry point.

use std::{
    io::{self, IsTerminal},
    process,
};

use clap::Parser;
use hostel_app::{
    cli::{Cli, Console, SystemClock},
    config,
    context::AppContext,
    observability,
};

#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    config::load_dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        fail(error.as_ref());
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    observability::init(&cli.config.logging)?;

    let ctx = AppContext::from_config(&cli.config.storage).await?;

    let stdin = io::stdin();
    let hide_secrets = stdin.is_terminal();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock()).hiding_secrets(hide_secrets);

    cli.run(&ctx, &mut console, &SystemClock).await?;

    Ok(())
}

#[expect(
    clippy::print_stderr,
    clippy::exit,
    reason = "Terminal failure reporting for the binary"
)]
fn fail(error: &dyn std::error::Error) -> ! {
    eprintln!("Error: {error}");

    let mut source = error.source();

    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }

    process::exit(1);
}
