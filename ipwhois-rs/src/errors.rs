use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpWhoisError {
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error! status: {}", status.as_u16())]
    Transport { status: reqwest::StatusCode },

    #[error("{0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Coarse category of an [`IpWhoisError`].
///
/// Decode failures and anything unexpected share `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Transport,
    Api,
    Unknown,
}

impl IpWhoisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IpWhoisError::Timeout { .. } => ErrorKind::Timeout,
            IpWhoisError::Transport { .. } => ErrorKind::Transport,
            IpWhoisError::Api(_) => ErrorKind::Api,
            IpWhoisError::HttpError(_) | IpWhoisError::Decode(_) | IpWhoisError::Other(_) => {
                ErrorKind::Unknown
            }
        }
    }
}
