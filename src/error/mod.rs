use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal input/output failed")]
    TerminalError(#[from] std::io::Error),
    #[error("invalid input, expected {expected}")]
    MalformedInput { expected: &'static str },
    #[error(transparent)]
    BusinessError(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
