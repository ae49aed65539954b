pub mod config;
pub mod console;
pub mod db;
pub mod demo;
pub mod service;

use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DatabaseConfig;
use crate::console::Console;
use crate::db::repo::{SqliteUserRepository, create_user_table};
use crate::service::UserService;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the demo output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = DatabaseConfig::load().context("Invalid database configuration")?;

    let pool = db::pool::connect(&config)
        .await
        .context("Failed to connect to the user database")?;
    create_user_table(&pool)
        .await
        .context("Failed to create the user table")?;
    info!("User table ready");

    let service = UserService::new(Arc::new(SqliteUserRepository::new(pool.clone())));
    let mut console = Console::stdout();

    demo::run(&service, &mut console).await?;

    pool.close().await;
    Ok(())
}
