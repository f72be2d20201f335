// ============================================================
// VALIDATION ISSUE
// ============================================================
// Row-level problems that exclude a single row from the result

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    ColumnCountMismatch { expected: usize, found: usize },
    InvalidEmail { value: String },
}

/// A rejected row: where it was and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// One-based line number in the source file
    pub line: usize,

    /// Human-readable reason shown in the preview
    pub reason: String,

    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn column_count_mismatch(line: usize, expected: usize, found: usize) -> Self {
        Self {
            line,
            reason: format!(
                "column count mismatch (expected {}, found {})",
                expected, found
            ),
            kind: IssueKind::ColumnCountMismatch { expected, found },
        }
    }

    pub fn invalid_email(line: usize, value: &str) -> Self {
        Self {
            line,
            reason: format!("invalid email: {}", value),
            kind: IssueKind::InvalidEmail {
                value: value.to_string(),
            },
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}
