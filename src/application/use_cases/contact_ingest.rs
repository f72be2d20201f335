// ============================================================
// CONTACT INGEST USE CASE
// ============================================================
// Orchestrate file reading, segmentation, and row validation

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::csv::ParseOutcome;
use crate::domain::error::{IngestError, Result};
use crate::domain::upload_session::UploadSession;
use crate::infrastructure::csv::{ContactRowValidator, CsvParser};
use crate::infrastructure::file_source::{FileSource, UploadFile};

/// Contact file ingestion use case
pub struct ContactIngestUseCase {
    parser: CsvParser,
}

impl Default for ContactIngestUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactIngestUseCase {
    pub fn new() -> Self {
        Self {
            parser: CsvParser::new(),
        }
    }

    /// Parse file text into accepted contacts and per-row issues.
    ///
    /// Only structural problems fail the whole call; a bad row is recorded
    /// as an issue and the next row is processed.
    pub fn parse(&self, text: &str) -> Result<ParseOutcome> {
        let rows = self.parser.parse_content(text)?;

        let (header, data_rows) = match rows.split_first() {
            Some((header, data_rows)) if !data_rows.is_empty() => (header, data_rows),
            _ => return Err(IngestError::EmptyFile.into()),
        };

        let validator = ContactRowValidator::from_header(header)?;

        let mut outcome = ParseOutcome::default();

        for row in data_rows {
            match validator.validate(row) {
                Ok(contact) => outcome.contacts.push(contact),
                Err(issue) => outcome.issues.push(issue),
            }
        }

        if outcome.contacts.is_empty() {
            return Err(IngestError::NoValidRows {
                issues: outcome.issues,
            }
            .into());
        }

        Ok(outcome)
    }

    /// Parse an already-read file into the session, replacing whatever it held
    pub fn ingest(&self, session: &mut UploadSession, file: &UploadFile) -> Result<()> {
        session.begin_parsing(&file.name)?;

        let start = Instant::now();
        let result = self.parse(&file.text);

        match &result {
            Ok(outcome) => info!(
                "Parsed {}: {} of {} rows accepted, {} rejected in {}ms",
                file.name,
                outcome.contacts.len(),
                outcome.row_count(),
                outcome.issues.len(),
                start.elapsed().as_millis()
            ),
            Err(e) => warn!("Rejected {}: {}", file.name, e),
        }

        session.finish_parsing(result)
    }

    /// Read a file through the source and ingest it.
    /// A file the source refuses leaves the session in `error`.
    pub async fn select_file(
        &self,
        session: &mut UploadSession,
        source: &dyn FileSource,
        path: &Path,
    ) -> Result<()> {
        match source.read(path).await {
            Ok(file) => self.ingest(session, &file),
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                session.reject_file(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::{IssueKind, ParsedContact};
    use crate::domain::error::AppError;
    use crate::domain::upload_session::UploadStatus;
    use async_trait::async_trait;
    use std::path::PathBuf;

    fn parse(text: &str) -> Result<ParseOutcome> {
        ContactIngestUseCase::new().parse(text)
    }

    fn ingest_error(result: Result<ParseOutcome>) -> IngestError {
        match result {
            Err(AppError::Ingest(err)) => err,
            other => panic!("expected ingest error, got {:?}", other),
        }
    }

    #[test]
    fn test_portuguese_synonyms() {
        let outcome = parse("email,nome,sobrenome\na@b.com,Ana,Silva").unwrap();

        assert_eq!(
            outcome.contacts,
            vec![ParsedContact::new("a@b.com")
                .with_first_name("Ana")
                .with_last_name("Silva")]
        );
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn test_custom_column_and_invalid_email() {
        let outcome = parse("email,first_name,phone\nx@y.com,Jo,123\nbad,Al,456").unwrap();

        assert_eq!(
            outcome.contacts,
            vec![ParsedContact::new("x@y.com")
                .with_first_name("Jo")
                .with_extra("phone", "123")]
        );
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].line, 3);
        assert!(outcome.issues[0].reason.contains("invalid email"));
    }

    #[test]
    fn test_header_only_is_empty_file() {
        assert_eq!(ingest_error(parse("email")), IngestError::EmptyFile);
        assert_eq!(ingest_error(parse("email\n\n   \n")), IngestError::EmptyFile);
        assert_eq!(ingest_error(parse("")), IngestError::EmptyFile);
    }

    #[test]
    fn test_missing_email_column_regardless_of_rows() {
        assert_eq!(
            ingest_error(parse("nome,sobrenome\nAna,Silva")),
            IngestError::MissingEmailColumn
        );
        assert_eq!(
            ingest_error(parse("nome,sobrenome\na@b.com,x@y.com")),
            IngestError::MissingEmailColumn
        );
    }

    #[test]
    fn test_all_rows_invalid_is_no_valid_rows() {
        let err = ingest_error(parse("email,nome\nbad,Ana\nalso-bad,Bia\nc@d.com"));

        match err {
            IngestError::NoValidRows { issues } => {
                assert_eq!(issues.len(), 3);
                assert_eq!(
                    issues[2].kind,
                    IssueKind::ColumnCountMismatch {
                        expected: 2,
                        found: 1
                    }
                );
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_rows_never_reach_contacts() {
        let outcome = parse("email,nome\na@b.com,Ana\nb@c.com\nc@d.com,Caio,Extra").unwrap();

        assert_eq!(outcome.contacts.len(), 1);
        assert_eq!(
            outcome.issues.iter().map(|i| i.line).collect::<Vec<_>>(),
            vec![3, 4]
        );
        assert!(outcome
            .issues
            .iter()
            .all(|i| i.reason.starts_with("column count mismatch")));
    }

    #[test]
    fn test_quoted_comma_is_a_column_mismatch() {
        let outcome = parse("email,company\na@b.com,Acme\nc@d.com,\"Acme, Inc\"").unwrap();

        assert_eq!(outcome.contacts.len(), 1);
        assert_eq!(outcome.issues[0].line, 3);
    }

    #[test]
    fn test_issues_and_contacts_keep_file_order() {
        let text = "email\nbad1\na@b.com\n\nbad2\nc@d.com";
        let outcome = parse(text).unwrap();

        assert_eq!(
            outcome
                .contacts
                .iter()
                .map(|c| c.email.as_str())
                .collect::<Vec<_>>(),
            vec!["a@b.com", "c@d.com"]
        );
        assert_eq!(
            outcome.issues.iter().map(|i| i.line).collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert_eq!(outcome.row_count(), 4);
    }

    #[test]
    fn test_blank_lines_never_shift_issue_lines() {
        for text in [
            "\nemail\na@b.com\nbad",
            "email\n\na@b.com\nbad",
            "email\na@b.com\n\n\nbad\n",
        ] {
            let outcome = parse(text).unwrap();

            assert_eq!(outcome.issues.len(), 1, "{:?}", text);
            assert_eq!(outcome.issues[0].line, 3, "{:?}", text);
        }
    }

    #[test]
    fn test_ingest_moves_session_to_preview() {
        let mut session = UploadSession::new();
        let file = UploadFile {
            name: "contacts.csv".to_string(),
            text: "email,nome\na@b.com,Ana\nbad,Bia".to_string(),
        };

        ContactIngestUseCase::new().ingest(&mut session, &file).unwrap();

        assert_eq!(session.status(), UploadStatus::Preview);
        assert_eq!(session.contacts().len(), 1);
        assert_eq!(session.errors().len(), 1);
    }

    #[test]
    fn test_ingest_structural_failure_moves_session_to_error() {
        let mut session = UploadSession::new();
        let file = UploadFile {
            name: "contacts.csv".to_string(),
            text: "nome\nAna".to_string(),
        };

        ContactIngestUseCase::new().ingest(&mut session, &file).unwrap();

        assert_eq!(session.status(), UploadStatus::Error);
        assert!(session.errors()[0].contains("email"));
    }

    struct RefusingSource;

    #[async_trait]
    impl FileSource for RefusingSource {
        async fn read(&self, path: &Path) -> Result<UploadFile> {
            Err(IngestError::UnsupportedFileType {
                file_name: path.display().to_string(),
            }
            .into())
        }
    }

    #[tokio::test]
    async fn test_select_file_records_refused_file() {
        let mut session = UploadSession::new();

        ContactIngestUseCase::new()
            .select_file(&mut session, &RefusingSource, &PathBuf::from("contacts.txt"))
            .await
            .unwrap();

        assert_eq!(session.status(), UploadStatus::Error);
        assert!(session.errors()[0].contains("contacts.txt"));
    }
}
