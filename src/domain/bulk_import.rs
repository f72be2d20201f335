use serde::{Deserialize, Serialize};

use super::contact_list::ListId;
use super::csv::ParsedContact;

/// Body of `POST /contacts/bulk_upload/`
#[derive(Debug, Serialize)]
pub struct BulkImportRequest<'a> {
    pub list_id: ListId,
    pub contacts: &'a [ParsedContact],
}

/// Success acknowledgment of the bulk-import endpoint
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BulkImportReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub updated: u64,
    #[serde(default)]
    pub total: u64,
}
