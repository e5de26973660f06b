use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("policy configuration error: {0}")]
    Config(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
