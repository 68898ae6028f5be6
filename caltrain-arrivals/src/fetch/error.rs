//! Timetable fetch error types.

use std::fmt;

/// Errors from fetching the timetable page.
#[derive(Debug)]
pub enum FetchError {
    /// HTTP request failed (connection refused, timeout, etc.)
    Http(reqwest::Error),

    /// Server answered with a non-success status code
    Status { status: u16, message: String },

    /// Client could not be constructed from the configuration
    InvalidConfig(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {e}"),
            FetchError::Status { status, message } => {
                write!(f, "timetable request failed with status {status}")?;
                if !message.is_empty() {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            FetchError::InvalidConfig(msg) => write!(f, "invalid client configuration: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}
