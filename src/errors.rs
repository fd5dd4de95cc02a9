use thiserror::Error;

/// Errors raised while loading a statement export
#[derive(Error, Debug)]
pub enum StatementError {
    /// Failed to read the export from disk
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was called without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// One or more rows failed validation; the whole import is rejected
    #[error("Import failed with {} row error(s)", .0.len())]
    InvalidRows(Vec<String>),
}

/// Why a single cell could not be converted into its typed value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    #[error("value is required")]
    Missing,

    #[error("invalid datetime '{0}'")]
    InvalidDateTime(String),

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("invalid decimal '{0}'")]
    InvalidDecimal(String),

    #[error("invalid integer '{0}'")]
    InvalidInteger(String),
}

pub type StatementResult<T> = Result<T, StatementError>;
