use thiserror::Error;

pub const MISSING_API_KEY_MESSAGE: &str = "API key is required.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch custom fields. Please check your API key.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key is empty")]
    MissingCredential,

    #[error("Authentication failed with status {status}")]
    Unauthorized { status: u16 },

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// Message shown to the user. Every remote failure collapses into the same
    /// text; the detailed cause only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::MissingCredential => MISSING_API_KEY_MESSAGE,
            ApiError::Unauthorized { .. }
            | ApiError::Status { .. }
            | ApiError::Network(_)
            | ApiError::Decode(_)
            | ApiError::InvalidBaseUrl { .. } => FETCH_FAILED_MESSAGE,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
