//! Error type shared by every pipeline stage.
//!
//! Every failure is terminal for a run: `main` prints the message on one line
//! and exits with the variant's code.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Transport failure or non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// Body is not JSON, or not any of the accepted table shapes.
    #[error("Format error: {0}")]
    Format(String),

    /// A required column is missing from the source table.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The requested product is not in the catalog.
    #[error(
        "Product not found: '{0}'. Re-run and choose one of the products from the printed list."
    )]
    NotFound(String),

    /// Degenerate arithmetic (e.g. back-solving a prior price through a -100% change).
    #[error("Computation error: {0}")]
    Computation(String),

    /// Console read/write failure.
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io(_) => 2,
            AppError::NotFound(_) => 3,
            AppError::Network(_) => 4,
            AppError::Format(_) => 5,
            AppError::Schema(_) => 6,
            AppError::Computation(_) => 7,
            AppError::Terminal(_) => 8,
        }
    }
}
