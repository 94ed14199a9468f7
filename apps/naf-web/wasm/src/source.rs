//! Fragment fetching seam

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Status and body of a fragment request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Same rule as `Response.ok`: any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something able to GET a fragment by URL
///
/// Futures are not `Send`: the browser event loop is single-threaded.
#[async_trait(?Send)]
pub trait FragmentSource {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(FetchResponse::new(200, "").is_success());
        assert!(FetchResponse::new(204, "").is_success());
        assert!(!FetchResponse::new(304, "").is_success());
        assert!(!FetchResponse::new(404, "").is_success());
        assert!(!FetchResponse::new(500, "").is_success());
    }
}
