//! CLI error types.

use domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the walkthrough.
#[derive(Debug, Error)]
pub enum CliError {
    /// A checkout rule was violated.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The seeded catalog has no product with this id.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
