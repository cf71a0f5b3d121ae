use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Generation API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No API key configured. Set GEMINI_API_KEY or gemini.api_key in the config file")]
    MissingApiKey,

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ApiError {
    /// Map an HTTP failure to an error, preferring the service's own
    /// `error.message` over the raw body
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.error.message)
            .unwrap_or(body);

        let msg = if message.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            message
        };

        match status {
            StatusCode::UNAUTHORIZED => ApiError::InvalidApiKey(msg),
            StatusCode::FORBIDDEN => ApiError::InvalidApiKey(msg),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(msg),
            StatusCode::NOT_FOUND => ApiError::NotFound(msg),
            StatusCode::BAD_REQUEST => ApiError::BadRequest(msg),
            status if status.is_server_error() => ApiError::ServerError(msg),
            status if status.is_client_error() => ApiError::BadRequest(msg),
            _ => ApiError::Unknown(msg),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        if e.is_decode() {
            ApiError::MalformedResponse(e.to_string())
        } else {
            ApiError::NetworkError(e.to_string())
        }
    }
}
