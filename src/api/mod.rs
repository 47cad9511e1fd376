//! REST API Bindings
//!
//! Thin async wrappers over the backend endpoints, organized by domain.
//! Every call returns `Result<T, ApiError>`; callers surface failures as
//! toasts and never retry.

mod books;
mod bookings;
mod products;
mod users;
mod wishlist;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use thiserror::Error;

// Re-export all public items
pub use books::*;
pub use bookings::*;
pub use products::*;
pub use users::*;
pub use wishlist::*;

/// Failure taxonomy for backend calls
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authorized")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Deployment-specific API root, resolved at compile time
pub fn api_base() -> &'static str {
    option_env!("BOOKVAULT_API_URL").unwrap_or("/api")
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Percent-encode caller data interpolated into a path segment
fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

fn check_status(res: &reqwest::Response) -> Result<(), ApiError> {
    match res.status().as_u16() {
        200..=299 => Ok(()),
        401 | 403 => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(status)),
    }
}

/// Require a 2xx status and a JSON body of the expected shape
async fn expect_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ApiError> {
    check_status(&res)?;
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Require a 2xx status, ignore the body
fn expect_ok(res: reqwest::Response) -> Result<(), ApiError> {
    check_status(&res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(encode_segment("abc123"), "abc123");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("user@example.com"), "user%40example%2Ecom");
    }
}
