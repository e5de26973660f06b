use thiserror::Error;
use vw_core::CoreError;
use vw_policy::PolicyError;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid grid: {0}")]
    Core(#[from] CoreError),

    #[error("invalid policy: {0}")]
    Policy(#[from] PolicyError),
}

pub type SimResult<T> = Result<T, SimError>;
