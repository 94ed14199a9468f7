use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NafError {
    #[error("Invalid NAF code: {0}")]
    InvalidCode(String),

    #[error("Unknown option type: {0}")]
    UnknownType(String),

    #[error("Malformed fragment: {0}")]
    MalformedFragment(String),
}
