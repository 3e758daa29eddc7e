// src/error.rs
use log::error;
use serde_json::json;
use std::convert::Infallible;
use thiserror::Error;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::{Rejection, Reply};

/// Everything a handler can fail with, mapped to a status code at the
/// rejection boundary only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Expected application/json media type")]
    UnsupportedMediaType,
    #[error("Malformed JSON body")]
    MalformedBody,
    #[error("Missing required fields")]
    MissingFields,
    #[error("purchase_price should be a number and shares should be an integer")]
    TypeMismatch,
    #[error("Stock not found")]
    NotFound,
    #[error("Failed to fetch stock price")]
    UpstreamFailure(u16),
    #[error("Internal server error")]
    Internal,
}

impl Reject for ApiError {}

impl From<crate::quotes::QuoteError> for ApiError {
    fn from(err: crate::quotes::QuoteError) -> Self {
        match err {
            crate::quotes::QuoteError::Upstream(code) => ApiError::UpstreamFailure(code),
            crate::quotes::QuoteError::Transport(e) => {
                error!("Quote request failed: {}", e);
                ApiError::Internal
            }
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::MalformedBody | ApiError::MissingFields | ApiError::TypeMismatch => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            // The provider's status is forwarded verbatim when it is a
            // representable code, otherwise 502.
            ApiError::UpstreamFailure(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts every rejection into a `{"error": "<message>"}` body. Unexpected
/// rejections are logged with their detail and surfaced as an opaque 500.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if let Some(api_err) = err.find::<ApiError>() {
        (api_err.status(), api_err.to_string())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else {
        error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    let body = warp::reply::json(&json!({ "error": message }));
    Ok(warp::reply::with_status(body, status))
}
