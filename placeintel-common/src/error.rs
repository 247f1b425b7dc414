//! Common error types for PlaceIntel

use thiserror::Error;

/// Common result type for PlaceIntel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across PlaceIntel services
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
