// src/models.rs
use serde::{Deserialize, Serialize};

/// Sentinel stored for `name` and `purchase_date` when the client omits them.
pub const NA: &str = "NA";

/// One recorded stock position. Serialized verbatim on the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockHolding {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub purchase_price: f64,
    pub purchase_date: String,
    pub shares: i64,
}

/// Validated write payload: everything a client may submit on POST/PUT.
/// The id is never part of the body; it comes from the generator on create
/// or the path on update.
#[derive(Debug, Clone, PartialEq)]
pub struct StockPayload {
    pub name: String,
    pub symbol: String,
    pub purchase_price: f64,
    pub purchase_date: String,
    pub shares: i64,
}

impl StockHolding {
    pub fn from_payload(id: String, payload: StockPayload) -> Self {
        StockHolding {
            id,
            name: payload.name,
            symbol: payload.symbol,
            purchase_price: payload.purchase_price,
            purchase_date: payload.purchase_date,
            shares: payload.shares,
        }
    }
}

/// Body of the create/update success responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: String,
}

/// Body of a successful GET /stock-value/{id}. `ticker` carries the quoted
/// per-share price.
#[derive(Debug, Serialize, Deserialize)]
pub struct StockValue {
    pub symbol: String,
    pub ticker: f64,
    pub stock_value: f64,
}

/// Body of a successful GET /portfolio-value.
#[derive(Debug, Serialize, Deserialize)]
pub struct PortfolioValue {
    pub portfolio_value: f64,
}

/// Shape of the quote provider's success response.
#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub price: f64,
}
