use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "migration")]
#[command(about = "Manage the schema of the expense tracker database")]
struct Cli {
    /// Connection URL; the default matches the `sqlite` path in settings.toml.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:expenses.db?mode=rwc")]
    database_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Default, PartialEq, Eq)]
enum Command {
    /// Apply every pending migration
    #[default]
    Up,
    /// Revert the last applied migration
    Down,
    /// Drop the users and expenses tables and migrate from scratch
    Fresh,
    /// Show which migrations are applied
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let db = Database::connect(&cli.database_url).await?;

    match cli.command.unwrap_or_default() {
        Command::Up => migration::Migrator::up(&db, None).await?,
        Command::Down => migration::Migrator::down(&db, Some(1)).await?,
        Command::Fresh => migration::Migrator::fresh(&db).await?,
        Command::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}
