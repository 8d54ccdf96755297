//! Dataset loading errors.

/// Error from loading the world-map dataset.
///
/// Row-level anomalies are skipped rather than reported; only failures
/// that prevent reading the sheet at all surface here.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The sheet itself was unreadable as CSV.
    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),
}
