//! Practikum CLI - database and API description tooling

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "practikum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database tables if they do not exist
    Init {
        /// Database file path
        #[arg(short, long, default_value = "app.db")]
        database: String,
    },

    /// Export the OpenAPI description of the REST API
    Openapi {
        /// Output file path
        #[arg(short, long, default_value = "openapi.json")]
        output: String,
    },

    /// Display row counts of an existing database
    Info {
        /// Database file path
        #[arg(short, long, default_value = "app.db")]
        database: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "practikum_cli=debug,practikum_core=debug"
    } else {
        "practikum_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Init { database } => commands::init(&database).await,

        Commands::Openapi { output } => commands::openapi(&output),

        Commands::Info { database, json } => commands::info(&database, json).await,
    }
}
