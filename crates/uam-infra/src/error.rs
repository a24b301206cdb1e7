//! Infrastructure error type.

use thiserror::Error;

use uam_core::StationId;

/// Errors produced while building or loading station infrastructure.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("station {0} defined more than once")]
    DuplicateStation(StationId),

    #[error("station parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InfraResult<T> = Result<T, InfraError>;
