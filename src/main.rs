use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::load_config;
use database::connection::{connect, run_migrations};
use database::repository::DbRepository;
use report::run_report;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// A department salary reporting tool for the company database.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top departments by average salary.
    Report,
    /// Apply the database schema migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables (DATABASE_URL) from the .env file, if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report => handle_report().await?,
        Commands::Migrate => handle_migrate().await?,
    }

    Ok(())
}

/// Handles the `report` command: connect, query, render, print.
async fn handle_report() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    let db_pool = connect(&config.database)
        .await
        .context("Failed to connect to the database")?;

    let db_repo = DbRepository::new(db_pool);
    let salary_report = run_report(&db_repo)
        .await
        .context("Failed to build the salary report")?;

    print!("{}", salary_report.render());
    Ok(())
}

/// Handles the `migrate` command: brings the schema up to date.
async fn handle_migrate() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    let db_pool = connect(&config.database)
        .await
        .context("Failed to connect to the database")?;

    run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database schema is up to date.");
    Ok(())
}
