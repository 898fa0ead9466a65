use http::StatusCode;
use thiserror::Error;

/// Failure talking to the activities backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or an undecodable body.
    #[error("activities api request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("activities api returned {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("activities api base url cannot take path segments: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// The backend's own explanation, when it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Signup form problems caught before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select an activity.")]
    MissingActivity,
    #[error("Please enter an email address.")]
    MissingEmail,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ACTIVITIES_API_URL is not a valid url: {0}")]
    ApiUrl(#[from] url::ParseError),
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },
}
