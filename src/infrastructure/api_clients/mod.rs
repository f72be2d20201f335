pub mod rest;

use crate::domain::bulk_import::BulkImportReceipt;
use crate::domain::contact_list::{ContactList, ListId};
use crate::domain::csv::ParsedContact;
use crate::domain::error::Result;
use async_trait::async_trait;

pub use rest::RestApiClient;

/// Enumerates the lists a contact file can be imported into
#[async_trait]
pub trait ContactListDirectory: Send + Sync {
    async fn list_all(&self) -> Result<Vec<ContactList>>;
}

/// The backend bulk-import endpoint.
///
/// All-or-nothing from the caller's side: either a receipt or one error.
/// A server-reported message comes back as `AppError::ApiError`.
#[async_trait]
pub trait ContactImporter: Send + Sync {
    async fn bulk_upload(
        &self,
        list_id: ListId,
        contacts: &[ParsedContact],
    ) -> Result<BulkImportReceipt>;
}
