//! Press database bootstrap.
//!
//! One-shot tool that applies the schema and seed SQL files and sets the
//! admin credential. Exits non-zero on the first failure.

mod config;
mod error;
mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::BootstrapConfig;
use error::BootstrapError;

#[derive(Parser, Debug)]
#[command(name = "press-bootstrap")]
#[command(version, about = "Initialise the Press database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Admin account email (overrides PRESS_ADMIN_EMAIL)
    #[arg(long, global = true)]
    admin_email: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply schema and seed files, then set the admin password
    Setup {
        /// Schema SQL file
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Seed SQL file
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Only set the admin password (PRESS_ADMIN_PASSWORD)
    SetPassword,

    /// Check that the required tables exist
    Validate,
}

impl Cli {
    /// Layer command-line flags over the environment configuration.
    fn apply(&self, config: &mut BootstrapConfig) {
        if let Some(ref url) = self.database_url {
            config.database_url = Some(url.clone());
        }
        if let Some(ref email) = self.admin_email {
            config.admin_email = email.clone();
        }
        if let Commands::Setup { schema, seed } = &self.command {
            if let Some(schema) = schema {
                config.schema_path = schema.clone();
            }
            if let Some(seed) = seed {
                config.seed_path = seed.clone();
            }
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,press_bootstrap=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn run(cli: Cli) -> Result<(), BootstrapError> {
    let mut config = BootstrapConfig::from_env()?;
    cli.apply(&mut config);

    match cli.command {
        Commands::Setup { .. } => runner::setup(&config).await,
        Commands::SetPassword => runner::set_password(&config).await,
        Commands::Validate => runner::validate(&config).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    tracing::info!(command = ?cli.command, "Starting database bootstrap");

    match run(cli).await {
        Ok(()) => {
            tracing::info!("Database bootstrap complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Database bootstrap failed");
            ExitCode::FAILURE
        }
    }
}
