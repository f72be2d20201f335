use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bulk_import::BulkImportReceipt;
use super::contact_list::ListId;
use super::csv::{ParseOutcome, ParsedContact, ValidationIssue};
use super::error::{AppError, IngestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Idle,
    Parsing,
    Preview,
    Uploading,
    Success,
    Error,
}

impl std::fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Parsing => "parsing",
            UploadStatus::Preview => "preview",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Success => "success",
            UploadStatus::Error => "error",
        };
        write!(f, "{}", label)
    }
}

/// One upload attempt, owned by whoever drives the page.
///
/// The session holds the frozen parse snapshot that both the preview and the
/// submission read from. Selecting a new file throws the previous snapshot
/// away; nothing is merged across files.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    status: UploadStatus,
    file_name: Option<String>,
    selected_list: Option<ListId>,
    outcome: Option<ParseOutcome>,
    /// Warnings while in preview, the blocking message(s) while in error
    errors: Vec<String>,
    receipt: Option<BulkImportReceipt>,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            status: UploadStatus::Idle,
            file_name: None,
            selected_list: None,
            outcome: None,
            errors: Vec::new(),
            receipt: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn selected_list(&self) -> Option<ListId> {
        self.selected_list
    }

    pub fn outcome(&self) -> Option<&ParseOutcome> {
        self.outcome.as_ref()
    }

    pub fn contacts(&self) -> &[ParsedContact] {
        self.outcome
            .as_ref()
            .map(|o| o.contacts.as_slice())
            .unwrap_or(&[])
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        self.outcome
            .as_ref()
            .map(|o| o.issues.as_slice())
            .unwrap_or(&[])
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn receipt(&self) -> Option<&BulkImportReceipt> {
        self.receipt.as_ref()
    }

    /// Choosing a list only replaces the selection; the parsed data stays
    pub fn select_list(&mut self, list_id: ListId) -> Result<()> {
        self.ensure_not_uploading()?;
        self.selected_list = Some(list_id);
        Ok(())
    }

    /// Start over with a new file. Everything but the list selection is dropped.
    pub fn begin_parsing(&mut self, file_name: impl Into<String>) -> Result<()> {
        self.ensure_not_uploading()?;
        self.status = UploadStatus::Parsing;
        self.file_name = Some(file_name.into());
        self.outcome = None;
        self.errors.clear();
        self.receipt = None;
        Ok(())
    }

    /// Record the parser's verdict for the file selected in [`begin_parsing`].
    ///
    /// [`begin_parsing`]: Self::begin_parsing
    pub fn finish_parsing(&mut self, result: Result<ParseOutcome>) -> Result<()> {
        if self.status != UploadStatus::Parsing {
            return Err(AppError::ValidationError(format!(
                "cannot finish parsing while {}",
                self.status
            )));
        }

        match result {
            Ok(outcome) => {
                self.errors = outcome.issues.iter().map(|i| i.to_string()).collect();
                self.outcome = Some(outcome);
                self.status = UploadStatus::Preview;
            }
            Err(err) => self.fail_parsing(&err),
        }
        Ok(())
    }

    /// A file was rejected before it could be parsed (wrong type, unreadable)
    pub fn reject_file(&mut self, err: &AppError) -> Result<()> {
        self.ensure_not_uploading()?;
        self.outcome = None;
        self.receipt = None;
        self.errors = vec![user_message(err)];
        self.status = UploadStatus::Error;
        Ok(())
    }

    /// Check submit preconditions and move to `uploading`.
    ///
    /// Returns the target list. On a precondition failure the session is left
    /// untouched and the error carries the message to show locally.
    pub fn begin_upload(&mut self) -> Result<ListId> {
        self.ensure_not_uploading()?;

        let list_id = self
            .selected_list
            .ok_or_else(|| AppError::ValidationError("Select a contact list".to_string()))?;

        if self.contacts().is_empty() {
            return Err(AppError::ValidationError(
                "No contacts to upload".to_string(),
            ));
        }

        if !matches!(self.status, UploadStatus::Preview | UploadStatus::Error) {
            return Err(AppError::ValidationError(format!(
                "cannot upload while {}",
                self.status
            )));
        }

        self.status = UploadStatus::Uploading;
        Ok(list_id)
    }

    /// Terminal transition out of `uploading`.
    /// On failure the parsed contacts are kept so the user can retry.
    pub fn finish_upload(
        &mut self,
        result: std::result::Result<BulkImportReceipt, String>,
    ) -> Result<()> {
        if self.status != UploadStatus::Uploading {
            return Err(AppError::ValidationError(format!(
                "cannot finish upload while {}",
                self.status
            )));
        }

        match result {
            Ok(receipt) => {
                self.errors.clear();
                self.receipt = Some(receipt);
                self.status = UploadStatus::Success;
            }
            Err(message) => {
                self.errors = vec![message];
                self.status = UploadStatus::Error;
            }
        }
        Ok(())
    }

    fn fail_parsing(&mut self, err: &AppError) {
        self.errors = vec![user_message(err)];
        // Rejected rows stay visible so the user can see why nothing passed
        self.outcome = match err {
            AppError::Ingest(IngestError::NoValidRows { issues }) => Some(ParseOutcome {
                issues: issues.clone(),
                ..Default::default()
            }),
            _ => None,
        };
        self.status = UploadStatus::Error;
    }

    fn ensure_not_uploading(&self) -> Result<()> {
        if self.status == UploadStatus::Uploading {
            return Err(AppError::ValidationError(
                "an upload is already in progress".to_string(),
            ));
        }
        Ok(())
    }
}

/// Ingestion failures already read as sentences; skip the category prefix
fn user_message(err: &AppError) -> String {
    match err {
        AppError::Ingest(ingest) => ingest.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome_with(contacts: Vec<ParsedContact>, issues: Vec<ValidationIssue>) -> ParseOutcome {
        ParseOutcome {
            contacts,
            issues,
        }
    }

    fn session_in_preview() -> UploadSession {
        let mut session = UploadSession::new();
        session.begin_parsing("contacts.csv").unwrap();
        session
            .finish_parsing(Ok(outcome_with(
                vec![ParsedContact::new("a@b.com")],
                vec![ValidationIssue::invalid_email(3, "bad")],
            )))
            .unwrap();
        session
    }

    #[test]
    fn test_happy_path_lifecycle() {
        let mut session = session_in_preview();
        assert_eq!(session.status(), UploadStatus::Preview);
        assert_eq!(session.errors(), &["line 3: invalid email: bad".to_string()]);

        session.select_list(ListId(1)).unwrap();
        assert_eq!(session.begin_upload().unwrap(), ListId(1));
        assert_eq!(session.status(), UploadStatus::Uploading);

        session
            .finish_upload(Ok(BulkImportReceipt {
                total: 1,
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(session.status(), UploadStatus::Success);
        assert!(session.errors().is_empty());
        assert_eq!(session.receipt().unwrap().total, 1);
    }

    #[test]
    fn test_begin_upload_requires_list() {
        let mut session = session_in_preview();
        let err = session.begin_upload().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref m) if m.contains("contact list")));
        assert_eq!(session.status(), UploadStatus::Preview);
    }

    #[test]
    fn test_begin_upload_requires_contacts() {
        let mut session = UploadSession::new();
        session.select_list(ListId(1)).unwrap();
        let err = session.begin_upload().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref m) if m.contains("No contacts")));
        assert_eq!(session.status(), UploadStatus::Idle);
    }

    #[test]
    fn test_second_submit_rejected_while_uploading() {
        let mut session = session_in_preview();
        session.select_list(ListId(1)).unwrap();
        session.begin_upload().unwrap();

        assert!(session.begin_upload().is_err());
        assert!(session.begin_parsing("other.csv").is_err());
        assert!(session.select_list(ListId(2)).is_err());
    }

    #[test]
    fn test_failed_upload_keeps_contacts_for_retry() {
        let mut session = session_in_preview();
        session.select_list(ListId(1)).unwrap();
        session.begin_upload().unwrap();
        session
            .finish_upload(Err("Contact list not found".to_string()))
            .unwrap();

        assert_eq!(session.status(), UploadStatus::Error);
        assert_eq!(session.errors(), &["Contact list not found".to_string()]);
        assert_eq!(session.contacts().len(), 1);

        // retry without reselecting the file
        assert!(session.begin_upload().is_ok());
    }

    #[test]
    fn test_structural_failure_blocks_upload() {
        let mut session = UploadSession::new();
        session.select_list(ListId(1)).unwrap();
        session.begin_parsing("contacts.csv").unwrap();
        session.finish_parsing(Err(IngestError::EmptyFile.into())).unwrap();

        assert_eq!(session.status(), UploadStatus::Error);
        assert_eq!(session.errors().len(), 1);
        assert!(session.begin_upload().is_err());
    }

    #[test]
    fn test_no_valid_rows_keeps_issues_visible() {
        let mut session = UploadSession::new();
        session.begin_parsing("contacts.csv").unwrap();
        session
            .finish_parsing(Err(IngestError::NoValidRows {
                issues: vec![ValidationIssue::invalid_email(2, "x")],
            }
            .into()))
            .unwrap();

        assert_eq!(session.status(), UploadStatus::Error);
        assert!(session.contacts().is_empty());
        assert_eq!(session.issues().len(), 1);
    }

    #[test]
    fn test_new_file_discards_previous_snapshot() {
        let mut session = session_in_preview();
        session.select_list(ListId(9)).unwrap();
        session.begin_parsing("second.csv").unwrap();

        assert_eq!(session.status(), UploadStatus::Parsing);
        assert!(session.contacts().is_empty());
        assert!(session.errors().is_empty());
        assert_eq!(session.file_name(), Some("second.csv"));
        assert_eq!(session.selected_list(), Some(ListId(9)));
    }

    #[test]
    fn test_finish_parsing_outside_parsing_is_an_error() {
        let mut session = UploadSession::new();
        assert!(session.finish_parsing(Err(IngestError::EmptyFile.into())).is_err());
        assert_eq!(session.status(), UploadStatus::Idle);
    }

    #[test]
    fn test_reject_file_moves_to_error() {
        let mut session = session_in_preview();
        let err = AppError::Ingest(IngestError::UnsupportedFileType {
            file_name: "contacts.xlsx".to_string(),
        });
        session.reject_file(&err).unwrap();

        assert_eq!(session.status(), UploadStatus::Error);
        assert!(session.errors()[0].contains("contacts.xlsx"));
        assert!(session.contacts().is_empty());
    }
}
