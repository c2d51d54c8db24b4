use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skeldoc")]
#[command(
    version,
    about = "Generate a markdown skeleton documenting the public surface of a Python codebase"
)]
struct Cli {
    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, short, help = "Only log errors")]
    quiet: bool,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let root = std::env::current_dir()?;
    let output = skeldoc::generate(&root)?;

    println!(
        "{} Project structure documentation generated at {}",
        style("✓").green(),
        output.display()
    );

    Ok(())
}
