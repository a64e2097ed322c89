/// Error types for the recommendation core.
///
/// `LoadError` covers dataset loading and is only ever raised at startup.
/// `CoreError` is what a recommendation call can fail with; the binary crate
/// wraps it via `#[from]` and decides how it reaches the wire.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("dataset {} row {row}: expected at most {expected} fields, found {found}", .path.display())]
    RowTooLong {
        path: PathBuf,
        row: u64,
        expected: usize,
        found: usize,
    },
}

/// Never produced by the in-memory `Assembler`; reserved for recommenders
/// whose backing data can become unreadable.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("dataset unavailable: {0}")]
    Unavailable(String),
}
