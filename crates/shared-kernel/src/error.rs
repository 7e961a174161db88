// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum QualityRangeError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, QualityRangeError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid encoded range '{value}': {details}")]
    InvalidEncodedRange { value: String, details: String },

    #[error("Invalid slider bound '{value}': {details}")]
    InvalidBound { value: String, details: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Presentation-layer errors raised by page adapters.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to update display slot '{slot}': {details}")]
    DisplayUpdateFailed { slot: String, details: String },

    #[error("Failed to write range field: {details}")]
    RangeFieldWriteFailed { details: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;
