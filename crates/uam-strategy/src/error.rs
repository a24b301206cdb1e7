use thiserror::Error;

/// Errors from configuring strategies.  Route infeasibility is not an
/// error; strategies report it as `None`.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("strategy configuration error: {0}")]
    Config(String),

    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),
}

pub type StrategyResult<T> = Result<T, StrategyError>;
