pub mod contact_ingest;
pub mod preview;
pub mod submission;
