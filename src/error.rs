//! API Errors

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never completed, or the body could not be read
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-2xx status
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Body was not the expected JSON shape
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status { status: 422, body: "score must be a number".to_string() };
        assert_eq!(err.to_string(), "backend returned 422: score must be a number");
    }
}
