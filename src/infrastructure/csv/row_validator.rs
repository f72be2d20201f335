// ============================================================
// CONTACT ROW VALIDATOR
// ============================================================
// Resolve header columns and turn raw rows into contacts

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::csv::{ColumnHeader, ParsedContact, RawRow, ValidationIssue};
use crate::domain::error::IngestError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validator bound to one file's header line
pub struct ContactRowValidator {
    headers: Vec<ColumnHeader>,
}

impl ContactRowValidator {
    /// Build from the header row. Fails when no column is `email`.
    pub fn from_header(header: &RawRow) -> Result<Self, IngestError> {
        let headers: Vec<ColumnHeader> = header
            .fields
            .iter()
            .map(|raw| ColumnHeader::parse(raw))
            .collect();

        if !headers.contains(&ColumnHeader::Email) {
            return Err(IngestError::MissingEmailColumn);
        }

        Ok(Self { headers })
    }

    /// Validate one data row. A rejected row yields the issue to report.
    pub fn validate(&self, row: &RawRow) -> Result<ParsedContact, ValidationIssue> {
        if row.fields.len() != self.headers.len() {
            return Err(ValidationIssue::column_count_mismatch(
                row.line,
                self.headers.len(),
                row.fields.len(),
            ));
        }

        let mut contact = ParsedContact::default();
        for (header, value) in self.headers.iter().zip(&row.fields) {
            contact.assign(header, value.clone());
        }

        if !is_valid_email(&contact.email) {
            return Err(ValidationIssue::invalid_email(row.line, &contact.email));
        }

        Ok(contact)
    }
}

/// Basic address-shape check: `local@domain.tld`, no whitespace, one `@`
pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && EMAIL_PATTERN.is_match(value)
}
