use thiserror::Error;

/// Core error type shared across shopgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A monetary amount could not be parsed.
    #[error("invalid money amount: {0}")]
    InvalidMoney(String),
}

/// Convenience alias for results returned by shopgen crates.
pub type Result<T> = std::result::Result<T, Error>;
