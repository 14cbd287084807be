//! The module contains the errors the engine can throw.
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Input failed a domain check (non-positive amount, bad limit, ...).
    #[error("{0}")]
    Validation(String),
    /// No stored expense matches the requested identifier.
    #[error("expense {0} not found")]
    NotFound(u64),
}
