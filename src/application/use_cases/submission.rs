// ============================================================
// SUBMISSION COORDINATOR
// ============================================================
// One bulk-import call per submit, mapped onto session states

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::bulk_import::BulkImportReceipt;
use crate::domain::error::{AppError, Result};
use crate::domain::upload_session::UploadSession;
use crate::infrastructure::api_clients::ContactImporter;
use crate::infrastructure::cache_signal::{CacheInvalidator, CacheKey};

/// Shown when the importer fails without a message of its own
pub const GENERIC_UPLOAD_ERROR: &str = "Upload failed";

/// Views that depend on imported data
const STALE_AFTER_IMPORT: [CacheKey; 2] = [CacheKey::Contacts, CacheKey::ContactLists];

pub struct SubmissionCoordinator {
    importer: Arc<dyn ContactImporter>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl SubmissionCoordinator {
    pub fn new(importer: Arc<dyn ContactImporter>, invalidator: Arc<dyn CacheInvalidator>) -> Self {
        Self {
            importer,
            invalidator,
        }
    }

    /// Submit the session's contacts to its selected list.
    ///
    /// Precondition failures come back as `ValidationError` before any call
    /// is made. Import failures move the session to `error` and return the
    /// message shown to the user as `ApiError`.
    pub async fn submit(&self, session: &mut UploadSession) -> Result<BulkImportReceipt> {
        let list_id = session.begin_upload()?;

        info!(
            "Uploading {} contacts to list {}",
            session.contacts().len(),
            list_id
        );

        let result = self.importer.bulk_upload(list_id, session.contacts()).await;

        match result {
            Ok(receipt) => {
                info!(
                    "Import finished: {} created, {} updated",
                    receipt.created, receipt.updated
                );
                session.finish_upload(Ok(receipt.clone()))?;
                self.invalidator.invalidate(&STALE_AFTER_IMPORT);
                Ok(receipt)
            }
            Err(e) => {
                warn!("Import into list {} failed: {}", list_id, e);
                let message = user_message(&e);
                session.finish_upload(Err(message.clone()))?;
                Err(AppError::ApiError(message))
            }
        }
    }
}

/// Server-reported messages are shown as-is; anything else gets the generic text
fn user_message(err: &AppError) -> String {
    match err {
        AppError::ApiError(msg) if !msg.trim().is_empty() => msg.clone(),
        _ => GENERIC_UPLOAD_ERROR.to_string(),
    }
}
