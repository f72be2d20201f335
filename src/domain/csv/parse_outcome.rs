// ============================================================
// PARSE OUTCOME
// ============================================================
// Frozen snapshot handed from the parser to preview and submission

use serde::{Deserialize, Serialize};

use super::{ParsedContact, ValidationIssue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Accepted contacts, in file line order
    pub contacts: Vec<ParsedContact>,

    /// Rejected rows, in file line order
    pub issues: Vec<ValidationIssue>,
}

impl ParseOutcome {
    /// Number of data rows seen, accepted or not
    pub fn row_count(&self) -> usize {
        self.contacts.len() + self.issues.len()
    }
}
