pub mod api_config;
pub mod bulk_import;
pub mod contact_list;
pub mod error;
pub mod upload_session;

// CSV contact ingestion
pub mod csv;
