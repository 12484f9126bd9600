use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// What handlers hand back to axum on failure.
pub type ApiError = (StatusCode, String);

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub const LOAD_FAILED: &str = "Failed to load food guide data";
const LOAD_HINT: &str = "Please ensure the data files are available in the data folder.";

#[derive(Debug, Error)]
pub enum ReferenceError {
    /// One of the reference files could not be fetched or decoded.
    #[error("Failed to load food guide data")]
    Load(#[source] BoxError),
    /// No usable reference data is resident; carries the last failure message.
    #[error("{0}")]
    Unavailable(String),
}

impl ReferenceError {
    pub fn to_api(&self) -> ApiError {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("{}. {}", self, LOAD_HINT),
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Please enter a valid name and age (2-120)")]
    Invalid,
    #[error("Please add at least one family member")]
    Empty,
    #[error("Profile {0} not found")]
    NotFound(Uuid),
}

impl ProfileError {
    pub fn to_api(&self) -> ApiError {
        let status = match self {
            Self::Invalid | Self::Empty => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, self.to_string())
    }
}
