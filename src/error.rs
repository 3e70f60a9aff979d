use std::fmt;

/// Custom error type for KSC operations
#[derive(Debug)]
pub enum KscError {
    /// A required configuration field was not supplied
    MissingConfiguration(&'static str),
    /// Login did not return 200
    AuthenticationFailed { status: u16 },
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned a non-success status for an RPC call
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Response parsed but a mandatory field was absent
    UnexpectedResponse(String),
}

impl fmt::Display for KscError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KscError::MissingConfiguration(field) => {
                write!(f, "Required attribute \"{}\" not passed", field)
            }
            KscError::AuthenticationFailed { status } => {
                write!(f, "Authentication failed (status {})", status)
            }
            KscError::Http(e) => write!(f, "HTTP request failed: {}", e),
            KscError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            KscError::Json(msg) => write!(f, "JSON error: {}", msg),
            KscError::UnexpectedResponse(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for KscError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KscError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for KscError {
    fn from(err: reqwest::Error) -> Self {
        KscError::Http(err)
    }
}

impl From<serde_json::Error> for KscError {
    fn from(err: serde_json::Error) -> Self {
        KscError::Json(err.to_string())
    }
}

/// Result type alias for KSC operations
pub type Result<T> = std::result::Result<T, KscError>;
