use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the loader and the reporting query.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required flat file or database file is absent.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
