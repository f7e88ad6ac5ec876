use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreetError {
    /// The output stream refused the greeting (closed pipe, full disk, ...).
    #[error("failed to write greeting: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GreetError>;
