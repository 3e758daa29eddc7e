// src/quotes.rs
use crate::config::Config;
use crate::models::QuoteResponse;
use log::{error, info};
use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// Provider answered with a non-success status; forwarded verbatim.
    #[error("quote provider returned HTTP {0}")]
    Upstream(u16),
    #[error("quote request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fetches the current per-share price for a symbol. One fresh round trip
/// per call; no timeout, retry, or caching.
pub async fn fetch_price(client: &Client, config: &Config, symbol: &str) -> Result<f64, QuoteError> {
    let response = client
        .get(&config.quote_api_url)
        .query(&[("ticker", symbol)])
        .header("X-Api-Key", &config.quote_api_key)
        .send()
        .await?;

    if !response.status().is_success() {
        error!(
            "Quote provider returned HTTP {} for {}",
            response.status(),
            symbol
        );
        return Err(QuoteError::Upstream(response.status().as_u16()));
    }

    let quote = response.json::<QuoteResponse>().await?;
    info!("Fetched quote for {}: {}", symbol, quote.price);
    Ok(quote.price)
}

#[cfg(test)]
mod tests {
    use crate::models::QuoteResponse;

    #[test]
    fn quote_response_parses_provider_payload() {
        let quote: QuoteResponse =
            serde_json::from_str(r#"{"ticker": "AAPL", "name": "Apple Inc", "price": 5.0}"#)
                .unwrap();
        assert_eq!(quote.price, 5.0);
    }

    #[test]
    fn quote_response_accepts_integer_price() {
        let quote: QuoteResponse = serde_json::from_str(r#"{"price": 150}"#).unwrap();
        assert_eq!(quote.price, 150.0);
    }
}
