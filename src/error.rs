use thiserror::Error;

/// Errors that can occur while loading, searching, bookmarking or uploading recipes
#[derive(Error, Debug)]
pub enum AppError {
    /// The HTTP request itself failed (connection, TLS, body decoding)
    #[error("Failed to fetch data: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Failed to fetch data from {url} Error Code = {status}")]
    Status { url: String, status: u16 },

    /// The request did not complete within the configured timeout
    #[error("Request took too long! Timeout after {0} second")]
    Timeout(u64),

    /// The server answered successfully but the payload lacks the expected data
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// User supplied input that cannot be turned into a valid request
    #[error("{0}")]
    Validation(String),

    /// The persisted bookmark blob could not be parsed or serialized
    #[error("Failed to read persisted bookmarks: {0}")]
    Persistence(#[from] serde_json::Error),

    /// Reading or writing the durable blob store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Whether the error came from the data source rather than from local input or storage
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(_)
                | AppError::Status { .. }
                | AppError::Timeout(_)
                | AppError::MalformedPayload(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            AppError::Timeout(120).to_string(),
            "Request took too long! Timeout after 120 second"
        );
    }

    #[test]
    fn test_upstream_classification() {
        assert!(AppError::Status {
            url: "http://x".to_string(),
            status: 404
        }
        .is_upstream());
        assert!(AppError::Timeout(1).is_upstream());
        assert!(!AppError::Validation("bad".to_string()).is_upstream());
    }

    #[test]
    fn test_persistence_from_json_error() {
        let err = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Persistence(_)));
    }
}
