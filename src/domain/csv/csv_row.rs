// ============================================================
// RAW CSV ROW
// ============================================================
// One segmented line of the source file, before any validation

use serde::{Deserialize, Serialize};

/// A single non-blank line split into fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// One-based position among the file's non-blank lines
    pub line: usize,

    /// Trimmed field values, in column order
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}
