use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("pattern compilation error: {0}")]
    Pattern(#[from] regex::Error),
}
