pub mod api_clients;
pub mod cache_signal;
pub mod config;
pub mod csv;
pub mod file_source;
pub mod response;
