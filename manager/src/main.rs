//! Customer Manager
//!
//! An operator console for keeping a table of customer contact records.
//! Uses hexagonal (ports & adapters) architecture: presenters in `app` drive
//! view ports implemented by the console adapter and a repository port
//! implemented over SeaORM.

use std::sync::Arc;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod migration;



use adapters::{Console, ConsoleApp, SqlCustomerRepository};
use config::Config;
use error::AppError;
use migration::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr; stdout belongs to the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,customer_manager=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting customer manager...");

    // Load configuration
    let config = Config::from_env();

    // Connect and bring the schema up to date
    let db = connect(&config)
        .await
        .with_context(|| format!("Cannot open {}", config.database_url))?;
    Migrator::up(&db, None)
        .await
        .map_err(|e| AppError::Migration(e.to_string()))
        .context("Cannot prepare the customers table")?;
    tracing::info!("Database ready");

    // Create adapters
    let repository = Arc::new(SqlCustomerRepository::new(db, config.query_timeout));
    let console = Arc::new(Console::stdio());

    let mut app = ConsoleApp::new(console, repository, config.success_delay);
    app.run().await;

    tracing::info!("Customer manager stopped");
    Ok(())
}

/// Open the connection pool and prove the database answers within the query timeout
async fn connect(config: &Config) -> Result<DatabaseConnection, AppError> {
    tracing::info!("Connecting to database...");

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .connect_timeout(config.query_timeout)
        .sqlx_logging(false);

    let attempt = async {
        let db = Database::connect(options).await?;
        db.ping().await?;
        Ok::<_, sea_orm::DbErr>(db)
    };

    match tokio::time::timeout(config.query_timeout, attempt).await {
        Ok(Ok(db)) => {
            tracing::info!("Database connected");
            Ok(db)
        }
        Ok(Err(e)) => {
            tracing::error!("Database connection failed: {}", e);
            Err(AppError::Connection(e.to_string()))
        }
        Err(_) => {
            tracing::error!(
                "Database did not respond within {}s",
                config.query_timeout.as_secs()
            );
            Err(AppError::ConnectionTimeout(config.query_timeout.as_secs()))
        }
    }
}
