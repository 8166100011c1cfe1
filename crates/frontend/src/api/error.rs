use thiserror::Error;

/// Failure of an activities API call.
///
/// `Display` of `Http` is exactly the message, so pages can show it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// No response at all (network, CORS, aborted)
    #[error("Request failed: {0}")]
    Transport(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Invalid report period: {0}")]
    InvalidPeriod(String),

    /// Browser refused to save the downloaded file
    #[error("Download failed: {0}")]
    Download(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
