//! Error types for tabulated reaction data

use thiserror::Error;

/// Errors raised while building or querying tables and distributions.
///
/// All of these are deterministic functions of the input data: a value
/// either passes validation and is returned whole, or an error is returned
/// and nothing is constructed.
#[derive(Error, Debug)]
pub enum Error {
    /// Structural violation in a table or grid (sizes, ordering, regions)
    #[error("invalid table: {0}")]
    InvalidTable(String),

    /// Arity violation or non-positive normalisation integral
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    /// Query outside the limits of a table
    #[error("value {value} is outside the domain [{lower}, {upper}]")]
    OutOfDomain { value: f64, lower: f64, upper: f64 },

    /// Interpolation law given a coordinate outside its mathematical domain
    #[error("domain error: {0}")]
    DomainError(String),

    /// Configuration could not be read
    #[error("configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
