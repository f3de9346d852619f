//! Failures that can end a catalog request.

use thiserror::Error;

/// Why a request to the games endpoint failed.
///
/// Every variant is recoverable: the list state records the message and
/// the next navigation starts a fresh request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("Failed to fetch games: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never produced a response (DNS, refused connection, ...).
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("Invalid response from server: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status, when the failure came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch games: 500 Internal Server Error"
        );
        assert_eq!(err.status(), Some(500));

        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_from_json_error() {
        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid response from server"));
    }
}
