//! Engine error taxonomy.
//!
//! All structural errors surface synchronously to the caller of the
//! operation that triggered them; none are transient, so there is no
//! retry machinery. Out-of-range cell access is deliberately NOT an
//! error (reads yield `Empty`, writes are dropped) - see the grid.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The environment cannot provide the minimum worker count the
    /// partitioned simulator requires. Fatal at grid construction.
    InsufficientParallelism { available: usize, required: usize },
    /// A circuit declares more cells than its payload actually holds.
    /// Fatal to the load operation; the grid is left unmodified.
    InvalidCircuit { declared: usize, actual: usize },
    /// A circuit payload that could not be parsed at all.
    MalformedCircuit { detail: String },
    /// A pixel color with no palette entry.
    UnknownColor { color: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InsufficientParallelism { available, required } => write!(
                f,
                "insufficient parallelism: {} worker(s) available, at least {} required",
                available, required
            ),
            EngineError::InvalidCircuit { declared, actual } => write!(
                f,
                "invalid circuit: {} cells declared, {} provided",
                declared, actual
            ),
            EngineError::MalformedCircuit { detail } => {
                write!(f, "malformed circuit: {}", detail)
            }
            EngineError::UnknownColor { color } => {
                write!(f, "unknown palette color: #{:08X}", color)
            }
        }
    }
}

impl std::error::Error for EngineError {}
