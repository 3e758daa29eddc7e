// src/api.rs
use crate::config::Config;
use crate::error::{self, ApiError};
use crate::models::{CreatedId, PortfolioValue, StockHolding, StockValue};
use crate::quotes;
use crate::store::StockStore;
use crate::validate;
use log::info;
use reqwest::Client;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{Filter, Rejection, Reply};

pub fn routes(
    store: StockStore,
    client: Client,
    config: Arc<Config>,
) -> impl Filter<Extract = impl Reply> + Clone {
    let list = warp::path!("stocks")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(list_stocks_handler);

    let create = warp::path!("stocks")
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .and_then(create_stock_handler);

    let retrieve = warp::path!("stocks" / String)
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(get_stock_handler);

    let update = warp::path!("stocks" / String)
        .and(warp::put())
        .and(with_store(store.clone()))
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .and_then(update_stock_handler);

    let delete = warp::path!("stocks" / String)
        .and(warp::delete())
        .and(with_store(store.clone()))
        .and_then(delete_stock_handler);

    let stock_value = warp::path!("stock-value" / String)
        .and(warp::get())
        .and(with_store(store.clone()))
        .and(with_client(client.clone()))
        .and(with_config(config.clone()))
        .and_then(stock_value_handler);

    let portfolio_value = warp::path!("portfolio-value")
        .and(warp::get())
        .and(with_store(store))
        .and(with_client(client))
        .and(with_config(config))
        .and_then(portfolio_value_handler);

    list.or(create)
        .or(retrieve)
        .or(update)
        .or(delete)
        .or(stock_value)
        .or(portfolio_value)
        .recover(error::handle_rejection)
}

fn with_store(
    store: StockStore,
) -> impl Filter<Extract = (StockStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

fn with_client(client: Client) -> impl Filter<Extract = (Client,), Error = Infallible> + Clone {
    warp::any().map(move || client.clone())
}

fn with_config(
    config: Arc<Config>,
) -> impl Filter<Extract = (Arc<Config>,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}

async fn list_stocks_handler(store: StockStore) -> Result<impl Reply, Rejection> {
    let holdings = store.list().await;
    Ok(warp::reply::json(&holdings))
}

async fn create_stock_handler(
    store: StockStore,
    content_type: Option<String>,
    body: Bytes,
) -> Result<impl Reply, Rejection> {
    let payload = validate::parse_stock_payload(content_type.as_deref(), &body)
        .map_err(warp::reject::custom)?;

    let id = Uuid::new_v4().to_string();
    let holding = StockHolding::from_payload(id.clone(), payload);
    store.put(id.clone(), holding).await;
    info!("Stock {} registered.", id);

    Ok(warp::reply::with_status(
        warp::reply::json(&CreatedId { id }),
        StatusCode::CREATED,
    ))
}

async fn get_stock_handler(id: String, store: StockStore) -> Result<impl Reply, Rejection> {
    match store.get(&id).await {
        Ok(holding) => Ok(warp::reply::json(&holding)),
        Err(_) => Err(warp::reject::custom(ApiError::NotFound)),
    }
}

/// Full replacement: the path id must already exist (checked before any body
/// validation), then every field is rebuilt from the submitted payload.
async fn update_stock_handler(
    id: String,
    store: StockStore,
    content_type: Option<String>,
    body: Bytes,
) -> Result<impl Reply, Rejection> {
    store
        .get(&id)
        .await
        .map_err(|_| warp::reject::custom(ApiError::NotFound))?;

    let payload = validate::parse_stock_payload(content_type.as_deref(), &body)
        .map_err(warp::reject::custom)?;

    let holding = StockHolding::from_payload(id.clone(), payload);
    store.put(id.clone(), holding).await;
    info!("Stock {} updated.", id);

    Ok(warp::reply::with_status(
        warp::reply::json(&CreatedId { id }),
        StatusCode::OK,
    ))
}

async fn delete_stock_handler(id: String, store: StockStore) -> Result<impl Reply, Rejection> {
    store
        .delete(&id)
        .await
        .map_err(|_| warp::reject::custom(ApiError::NotFound))?;
    info!("Stock {} deleted.", id);

    Ok(warp::reply::with_status(
        warp::reply(),
        StatusCode::NO_CONTENT,
    ))
}

async fn stock_value_handler(
    id: String,
    store: StockStore,
    client: Client,
    config: Arc<Config>,
) -> Result<impl Reply, Rejection> {
    let holding = store
        .get(&id)
        .await
        .map_err(|_| warp::reject::custom(ApiError::NotFound))?;

    // The store lock is released before the outbound call.
    let price = quotes::fetch_price(&client, &config, &holding.symbol)
        .await
        .map_err(|e| warp::reject::custom(ApiError::from(e)))?;

    Ok(warp::reply::json(&StockValue {
        symbol: holding.symbol,
        ticker: price,
        stock_value: holding.shares as f64 * price,
    }))
}

/// Sums shares * current price over all holdings, one quote per distinct
/// symbol. Any failed quote fails the whole request; no partial totals.
async fn portfolio_value_handler(
    store: StockStore,
    client: Client,
    config: Arc<Config>,
) -> Result<impl Reply, Rejection> {
    let mut shares_by_symbol: HashMap<String, i64> = HashMap::new();
    for holding in store.list().await {
        *shares_by_symbol.entry(holding.symbol).or_insert(0) += holding.shares;
    }

    let mut total = 0.0;
    for (symbol, shares) in shares_by_symbol {
        let price = quotes::fetch_price(&client, &config, &symbol)
            .await
            .map_err(|e| warp::reject::custom(ApiError::from(e)))?;
        total += shares as f64 * price;
    }

    Ok(warp::reply::json(&PortfolioValue {
        portfolio_value: total,
    }))
}
