//! User Store - runs the user record demonstration sequence.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{Locale, UserId};
use common::DEFAULT_LOG_LEVEL;
use user_store_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-store")]
#[command(about = "In-memory user record store")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the create, read, update, delete sequence once
    Demo {
        /// Language for status lines (ru, en)
        #[arg(long)]
        locale: Option<Locale>,
        /// Identifier of the demo user
        #[arg(long)]
        user_id: Option<UserId>,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration; CLI arguments take precedence
    let mut config = UserServiceConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Demo { locale, user_id } => {
            if let Some(locale) = locale {
                config.locale = locale;
            }
            if let Some(user_id) = user_id {
                config.demo_user_id = user_id;
            }

            // A halted demo has already been reported; it is not a process failure.
            let outcome = user_store_lib::run_demo(&config).await;
            tracing::debug!(completed = outcome.is_completed(), "Demo finished");
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
