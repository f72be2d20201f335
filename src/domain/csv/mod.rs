// ============================================================
// CSV CONTACT DOMAIN LAYER
// ============================================================
// Core types and value objects for contact ingestion
// No I/O, no async

mod column_header;
mod csv_row;
mod ingest_config;
mod parse_outcome;
mod parsed_contact;
mod validation_issue;

pub use column_header::ColumnHeader;
pub use csv_row::RawRow;
pub use ingest_config::IngestConfig;
pub use parse_outcome::ParseOutcome;
pub use parsed_contact::ParsedContact;
pub use validation_issue::{IssueKind, ValidationIssue};

use std::collections::BTreeMap;

/// Free-form attributes, in stable key order
pub type ExtraFields = BTreeMap<String, String>;
