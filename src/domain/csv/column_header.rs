// ============================================================
// COLUMN HEADER
// ============================================================
// Maps raw header tokens onto canonical contact slots

use serde::{Deserialize, Serialize};

/// A normalized header column.
///
/// Synonyms for the canonical slots are resolved here so the row validator
/// never has to look at raw header text again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnHeader {
    Email,
    FirstName,
    LastName,
    /// Any other column, keyed by its lower-cased name
    Custom(String),
}

impl ColumnHeader {
    /// Trim and lower-case a raw token, then resolve synonyms
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();

        match normalized.as_str() {
            "email" => ColumnHeader::Email,
            "first_name" | "nome" => ColumnHeader::FirstName,
            "last_name" | "sobrenome" => ColumnHeader::LastName,
            _ => ColumnHeader::Custom(normalized),
        }
    }

    /// Key used when the column is rendered or serialized
    pub fn key(&self) -> &str {
        match self {
            ColumnHeader::Email => "email",
            ColumnHeader::FirstName => "first_name",
            ColumnHeader::LastName => "last_name",
            ColumnHeader::Custom(name) => name,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, ColumnHeader::Custom(_))
    }
}

impl std::fmt::Display for ColumnHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
