// src/main.rs
mod api;
mod config;
mod error;
mod models;
mod quotes;
mod store;
mod validate;

use crate::config::Config;
use crate::store::StockStore;
use env_logger::Builder;
use log::{error, info, LevelFilter};
use reqwest::Client;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    info!("Starting the stock registry service...");
    let store = StockStore::new();
    let client = Client::new();

    let api = api::routes(store, client, config.clone());

    info!("Server running on http://{}", config.bind_addr);
    warp::serve(api).run(config.bind_addr).await;
}
