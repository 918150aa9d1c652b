//! Operator CLI: check profile documents and dispatch notifications.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::notify::KindArg;

#[derive(Parser)]
#[command(name = "lifemate")]
#[command(about = "LifeMate profile and notification tooling")]
struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile document commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Render a notification from a JSON input file and send it
    Notify {
        #[arg(value_enum)]
        kind: KindArg,
        /// JSON file with the notification's parameters
        input: PathBuf,
        /// Print the rendered email instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Validate a profile JSON document and report its completion
    Check {
        path: PathBuf,
        /// Count the owner as having a profile image
        #[arg(long)]
        profile_image: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Profile {
            action:
                ProfileCommands::Check {
                    path,
                    profile_image,
                },
        } => commands::profile::check(&path, profile_image)?,
        Commands::Notify {
            kind,
            input,
            dry_run,
        } => commands::notify::run(kind, &input, dry_run).await?,
    }

    Ok(())
}
