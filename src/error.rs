use thiserror::Error;

/// All failures are fatal: no partial PDF is ever written, because every
/// validation runs before the document is created.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read items file: {0}")]
    InputNotFound(String),
    #[error("No usable items in {0} (blank lines and # comments are skipped)")]
    EmptyPool(String),
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    #[error("Need at least {required} items to fill a card, but only {available} were provided")]
    InsufficientItems { required: usize, available: usize },
    #[error("Must generate at least 1 card (got {0})")]
    InvalidCardCount(u32),
    #[error("Failed to create PDF: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
