//! Gateway error types.

use thiserror::Error;

/// Errors that can occur during gateway operations.
///
/// Shape drift inside a syntactically valid response body is not an error:
/// the envelope normalizer absorbs it and falls back to empty defaults.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network unreachable, connection refused, or transport-level timeout.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status. The message is taken from
    /// the response body's `message` field when present.
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body is not valid JSON.
    #[error("Could not decode server response: {0}")]
    Decode(String),

    /// An operation that requires a credential was invoked with none stored.
    #[error("Not logged in. Run 'folio auth login' first.")]
    Unauthenticated,

    /// Failed to persist or remove the stored credential.
    #[error("Credential storage error: {0}")]
    Credential(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message() {
        let err = ApiError::Server {
            status: 404,
            message: "Project not found".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 404: Project not found");
    }

    #[test]
    fn test_unauthenticated_is_fixed_message() {
        assert!(ApiError::Unauthenticated.to_string().contains("Not logged in"));
    }
}
