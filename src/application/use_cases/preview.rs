// ============================================================
// CONTACT PREVIEW PRESENTER
// ============================================================
// Capped, read-only view over a parse outcome

use std::fmt;

use serde::Serialize;

use crate::domain::csv::{IngestConfig, ParseOutcome, ParsedContact, ValidationIssue};

/// What the preview shows: a head of contacts and issues plus what was cut
#[derive(Debug, Serialize)]
pub struct ContactPreview<'a> {
    pub contacts: &'a [ParsedContact],
    pub total_contacts: usize,
    pub issues: &'a [ValidationIssue],
    pub total_issues: usize,
}

impl ContactPreview<'_> {
    pub fn hidden_contacts(&self) -> usize {
        self.total_contacts - self.contacts.len()
    }

    pub fn hidden_issues(&self) -> usize {
        self.total_issues - self.issues.len()
    }

    fn warnings(&self) -> IssueSummary<'_> {
        IssueSummary {
            issues: self.issues,
            total: self.total_issues,
        }
    }
}

/// Capped list of rejected rows, rendered on its own when nothing was accepted
#[derive(Debug, Serialize)]
pub struct IssueSummary<'a> {
    pub issues: &'a [ValidationIssue],
    pub total: usize,
}

pub struct PreviewPresenter {
    contact_limit: usize,
    issue_limit: usize,
}

impl Default for PreviewPresenter {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}

impl PreviewPresenter {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            contact_limit: config.preview_contact_limit,
            issue_limit: config.preview_issue_limit,
        }
    }

    pub fn present<'a>(&self, outcome: &'a ParseOutcome) -> ContactPreview<'a> {
        let shown_contacts = outcome.contacts.len().min(self.contact_limit);
        let shown_issues = outcome.issues.len().min(self.issue_limit);

        ContactPreview {
            contacts: &outcome.contacts[..shown_contacts],
            total_contacts: outcome.contacts.len(),
            issues: &outcome.issues[..shown_issues],
            total_issues: outcome.issues.len(),
        }
    }

    pub fn summarize_issues<'a>(&self, issues: &'a [ValidationIssue]) -> IssueSummary<'a> {
        IssueSummary {
            issues: &issues[..issues.len().min(self.issue_limit)],
            total: issues.len(),
        }
    }
}

const EMAIL_TITLE: &str = "Email";
const FIRST_NAME_TITLE: &str = "First name";
const LAST_NAME_TITLE: &str = "Last name";
const MISSING: &str = "-";

fn name_or_dash(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => MISSING,
    }
}

impl fmt::Display for IssueSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return Ok(());
        }

        writeln!(f, "Warnings ({})", self.total)?;
        for issue in self.issues {
            writeln!(f, "  - {}", issue)?;
        }
        let hidden = self.total - self.issues.len();
        if hidden > 0 {
            writeln!(f, "  ... and {} more warnings", hidden)?;
        }
        Ok(())
    }
}

impl fmt::Display for ContactPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_issues > 0 {
            write!(f, "{}", self.warnings())?;
            writeln!(f)?;
        }

        let email_width = self
            .contacts
            .iter()
            .map(|c| c.email.chars().count())
            .chain(std::iter::once(EMAIL_TITLE.len()))
            .max()
            .unwrap_or(EMAIL_TITLE.len());
        let first_width = self
            .contacts
            .iter()
            .map(|c| name_or_dash(&c.first_name).chars().count())
            .chain(std::iter::once(FIRST_NAME_TITLE.len()))
            .max()
            .unwrap_or(FIRST_NAME_TITLE.len());

        writeln!(
            f,
            "{:<ew$} | {:<fw$} | {}",
            EMAIL_TITLE,
            FIRST_NAME_TITLE,
            LAST_NAME_TITLE,
            ew = email_width,
            fw = first_width
        )?;
        writeln!(
            f,
            "{}-+-{}-+-{}",
            "-".repeat(email_width),
            "-".repeat(first_width),
            "-".repeat(LAST_NAME_TITLE.len())
        )?;

        for contact in self.contacts {
            writeln!(
                f,
                "{:<ew$} | {:<fw$} | {}",
                contact.email,
                name_or_dash(&contact.first_name),
                name_or_dash(&contact.last_name),
                ew = email_width,
                fw = first_width
            )?;
        }

        if self.hidden_contacts() > 0 {
            writeln!(
                f,
                "Showing {} of {} contacts",
                self.contacts.len(),
                self.total_contacts
            )?;
        }

        Ok(())
    }
}
