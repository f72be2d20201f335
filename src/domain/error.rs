use serde::{Deserialize, Serialize};
use std::fmt;

use super::csv::ValidationIssue;

/// Failures that abort an ingestion attempt as a whole.
///
/// Row-level problems never show up here; they are collected as
/// [`ValidationIssue`]s next to the accepted contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestError {
    /// The selected file does not carry the expected extension.
    UnsupportedFileType { file_name: String },
    /// Fewer than two non-blank lines: nothing besides (maybe) a header.
    EmptyFile,
    /// The header line has no `email` column.
    MissingEmailColumn,
    /// Data rows existed but every one of them was rejected.
    NoValidRows { issues: Vec<ValidationIssue> },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::UnsupportedFileType { file_name } => {
                write!(f, "Unsupported file type, please select a CSV file: {}", file_name)
            }
            IngestError::EmptyFile => {
                write!(f, "The CSV file is empty or only contains the header")
            }
            IngestError::MissingEmailColumn => {
                write!(f, "The CSV file must contain an \"email\" column")
            }
            IngestError::NoValidRows { issues } => write!(
                f,
                "No valid contacts found in the file ({} rows rejected)",
                issues.len()
            ),
        }
    }
}

impl std::error::Error for IngestError {}

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    Internal(String),
    NotFound(String),
    ValidationError(String),
    ParseError(String),
    ApiError(String),
    Transport(String),
    ConfigError(String),
    IoError(String),
    Ingest(IngestError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::ApiError(msg) => write!(f, "API error: {}", msg),
            AppError::Transport(msg) => write!(f, "Transport error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::Ingest(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        AppError::Ingest(err)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_error_wraps_into_app_error() {
        let err: AppError = IngestError::MissingEmailColumn.into();
        assert!(matches!(err, AppError::Ingest(IngestError::MissingEmailColumn)));
        assert!(err.to_string().contains("\"email\" column"));
    }

    #[test]
    fn test_no_valid_rows_reports_rejected_count() {
        let err = IngestError::NoValidRows {
            issues: vec![ValidationIssue::invalid_email(2, "nope")],
        };
        assert!(err.to_string().contains("1 rows rejected"));
    }
}
