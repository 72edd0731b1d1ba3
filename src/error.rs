use http::StatusCode;
use thiserror::Error;
use url::ParseError as UrlParseError;

/// Error types for the device API client.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The API rejected the request (400, 401 or 404).
    #[error("Client error ({status}): {reason}")]
    ClientError { status: StatusCode, reason: String },

    /// The API failed while handling the request.
    #[error("Server error ({status})")]
    ServerError { status: StatusCode },

    /// The API answered with a status the client does not recognise.
    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(StatusCode),

    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered but its body could not be read.
    #[error("Failed to read response body: {0}")]
    ResponseBodyError(String),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// The API endpoint/path string is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

impl DeviceError {
    /// The HTTP status behind this error, if the API answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DeviceError::ClientError { status, .. } | DeviceError::ServerError { status } => {
                Some(*status)
            }
            DeviceError::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }
}

/// Result type for device API operations.
pub type DeviceResult<T> = Result<T, DeviceError>;
