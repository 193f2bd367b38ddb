use thiserror::Error;

/// Closed error taxonomy. Display strings double as the public API error
/// messages, so they must never carry parser or filesystem detail.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan not found")]
    PlanNotFound,

    #[error("invalid data format")]
    InvalidFormat,

    #[error("invalid request body")]
    InvalidBody,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
