use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::persistence::Persistence;
use crate::repositories::suggestion_store::SuggestionStore;

pub mod config;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting suggestions backend in {} environment", config.environment);

    let persistence = Persistence::from_config(&config);
    let suggestion_store = SuggestionStore::open(persistence)
        .await
        .context("Failed to open the suggestion store")?;

    let app_state = AppState {
        suggestion_store: Arc::new(suggestion_store),
    };
    controller::serve(app_state, &config).await
}
