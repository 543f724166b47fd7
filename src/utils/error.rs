use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fetch error: {message}")]
    Fetch { message: String },

    #[error("Validation error: {field}: {reason}")]
    Validation { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
