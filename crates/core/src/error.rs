//! Error types for the inkport import pipeline.
//!
//! Only failures of the external document parser (and an explicit
//! cancellation) surface here. Malformed operators, empty paints, stack
//! underflow and degenerate geometry are recovered inside the interpreter
//! and never produce an error value.

use thiserror::Error;

/// Primary error type for page import operations.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("page unavailable: {0}")]
    Page(String),

    #[error("operator list unavailable: {0}")]
    OperatorList(String),

    #[error("text content unavailable: {0}")]
    TextContent(String),

    #[error("invalid page geometry: {width} x {height}")]
    InvalidGeometry { width: f64, height: f64 },

    #[error("import cancelled")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed page document: {0}")]
    Json(#[from] serde_json::Error),
}

impl ImportError {
    /// Returns true if the external parser could not supply the page.
    pub const fn is_parser_failure(&self) -> bool {
        !matches!(self, ImportError::Cancelled)
    }
}

/// Convenience Result type alias for ImportError.
pub type Result<T> = std::result::Result<T, ImportError>;
