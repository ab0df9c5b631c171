use std::fmt;

/// Search Ads SDK error type
///
/// Represents all possible errors that can occur when resolving credentials,
/// authenticating, or interacting with the Apple Search Ads API.
#[derive(Debug)]
pub enum SearchAdsError {
    /// Required credential fields or private key material missing
    Config(String),
    /// Building or signing the client-secret assertion failed
    Assertion(String),
    /// Token endpoint rejected the exchange or returned an unusable body
    Auth(ApiError),
    /// API request failed (network, HTTP, or response parsing error)
    Api(ApiError),
}

impl fmt::Display for SearchAdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAdsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SearchAdsError::Assertion(msg) => write!(f, "Assertion error: {}", msg),
            SearchAdsError::Auth(err) => write!(f, "Authentication error: {}", err),
            SearchAdsError::Api(err) => write!(f, "API error: {}", err),
        }
    }
}

impl std::error::Error for SearchAdsError {}

impl From<ApiError> for SearchAdsError {
    fn from(err: ApiError) -> Self {
        SearchAdsError::Api(err)
    }
}

impl From<jsonwebtoken::errors::Error> for SearchAdsError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        SearchAdsError::Assertion(err.to_string())
    }
}

/// API-specific errors
#[derive(Debug)]
pub enum ApiError {
    /// Network error (connection, timeout, etc.)
    Network(String),
    /// HTTP error with status code and response body
    Http { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Request building failed
    Request(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Request(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timeout".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Connection failed: {}", err))
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
