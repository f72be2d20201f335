pub mod use_cases;

pub use use_cases::contact_ingest::ContactIngestUseCase;
pub use use_cases::preview::{ContactPreview, IssueSummary, PreviewPresenter};
pub use use_cases::submission::SubmissionCoordinator;
