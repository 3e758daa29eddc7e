// src/validate.rs
use crate::error::ApiError;
use crate::models::{StockPayload, NA};
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 3] = ["symbol", "purchase_price", "shares"];

/// Validates a write-operation body and produces the typed payload.
///
/// Checks run in order: media type, JSON-object shape, required-field
/// presence, field types. `name` and `purchase_date` default to the literal
/// string "NA" when absent.
pub fn parse_stock_payload(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<StockPayload, ApiError> {
    if content_type != Some("application/json") {
        return Err(ApiError::UnsupportedMediaType);
    }

    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::MalformedBody)?;
    let obj = value.as_object().ok_or(ApiError::MalformedBody)?;

    if REQUIRED_FIELDS.iter().any(|field| !obj.contains_key(*field)) {
        return Err(ApiError::MissingFields);
    }

    let symbol = obj["symbol"]
        .as_str()
        .ok_or(ApiError::TypeMismatch)?
        .to_string();
    // as_f64 accepts any JSON number; booleans and numeric strings are not
    // numbers. as_i64 rejects fractional values like 3.5 outright.
    let purchase_price = obj["purchase_price"]
        .as_f64()
        .ok_or(ApiError::TypeMismatch)?;
    let shares = obj["shares"].as_i64().ok_or(ApiError::TypeMismatch)?;

    let name = optional_string(obj.get("name"))?;
    let purchase_date = optional_string(obj.get("purchase_date"))?;

    Ok(StockPayload {
        name,
        symbol,
        purchase_price,
        purchase_date,
        shares,
    })
}

fn optional_string(value: Option<&Value>) -> Result<String, ApiError> {
    match value {
        None => Ok(NA.to_string()),
        Some(v) => v
            .as_str()
            .map(|s| s.to_string())
            .ok_or(ApiError::TypeMismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json");

    fn body(s: &str) -> Vec<u8> {
        s.as_bytes().to_vec()
    }

    #[test]
    fn valid_payload_with_all_fields() {
        let payload = parse_stock_payload(
            JSON,
            &body(
                r#"{"name": "Apple Inc", "symbol": "AAPL", "purchase_price": 150.25,
                    "purchase_date": "2024-01-02", "shares": 10}"#,
            ),
        )
        .unwrap();

        assert_eq!(payload.symbol, "AAPL");
        assert_eq!(payload.purchase_price, 150.25);
        assert_eq!(payload.shares, 10);
        assert_eq!(payload.name, "Apple Inc");
        assert_eq!(payload.purchase_date, "2024-01-02");
    }

    #[test]
    fn omitted_name_and_date_default_to_na() {
        let payload = parse_stock_payload(
            JSON,
            &body(r#"{"symbol": "AAPL", "purchase_price": 150, "shares": 10}"#),
        )
        .unwrap();

        assert_eq!(payload.name, "NA");
        assert_eq!(payload.purchase_date, "NA");
    }

    #[test]
    fn integer_purchase_price_is_accepted() {
        let payload = parse_stock_payload(
            JSON,
            &body(r#"{"symbol": "AAPL", "purchase_price": 150, "shares": 10}"#),
        )
        .unwrap();
        assert_eq!(payload.purchase_price, 150.0);
    }

    #[test]
    fn wrong_or_missing_content_type_is_rejected() {
        let b = body(r#"{"symbol": "AAPL", "purchase_price": 150, "shares": 10}"#);
        assert!(matches!(
            parse_stock_payload(Some("text/plain"), &b),
            Err(ApiError::UnsupportedMediaType)
        ));
        assert!(matches!(
            parse_stock_payload(None, &b),
            Err(ApiError::UnsupportedMediaType)
        ));
    }

    #[test]
    fn malformed_and_non_object_bodies_are_rejected() {
        assert!(matches!(
            parse_stock_payload(JSON, &body("not json")),
            Err(ApiError::MalformedBody)
        ));
        assert!(matches!(
            parse_stock_payload(JSON, &body("[1, 2, 3]")),
            Err(ApiError::MalformedBody)
        ));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(matches!(
            parse_stock_payload(JSON, &body(r#"{"symbol": "AAPL", "shares": 10}"#)),
            Err(ApiError::MissingFields)
        ));
    }

    #[test]
    fn string_price_and_fractional_shares_are_rejected() {
        assert!(matches!(
            parse_stock_payload(
                JSON,
                &body(r#"{"symbol": "AAPL", "purchase_price": "10.5", "shares": 10}"#)
            ),
            Err(ApiError::TypeMismatch)
        ));
        assert!(matches!(
            parse_stock_payload(
                JSON,
                &body(r#"{"symbol": "AAPL", "purchase_price": 150, "shares": 3.5}"#)
            ),
            Err(ApiError::TypeMismatch)
        ));
    }

    #[test]
    fn boolean_price_is_rejected() {
        assert!(matches!(
            parse_stock_payload(
                JSON,
                &body(r#"{"symbol": "AAPL", "purchase_price": true, "shares": 10}"#)
            ),
            Err(ApiError::TypeMismatch)
        ));
    }
}
