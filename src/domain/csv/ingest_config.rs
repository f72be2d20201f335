// ============================================================
// INGEST CONFIGURATION
// ============================================================
// File acceptance and preview caps

use serde::{Deserialize, Serialize};

/// Configuration for contact ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// File extension accepted by the file source, without the dot (default: csv)
    pub allowed_extension: String,

    /// Maximum number of contacts shown in the preview (default: 50)
    pub preview_contact_limit: usize,

    /// Maximum number of issues listed in the preview (default: 10)
    pub preview_issue_limit: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            allowed_extension: "csv".to_string(),
            preview_contact_limit: 50,
            preview_issue_limit: 10,
        }
    }
}

impl IngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_extension.trim().is_empty() {
            return Err("allowed_extension must not be empty".to_string());
        }
        if self.allowed_extension.starts_with('.') {
            return Err("allowed_extension must not start with a dot".to_string());
        }
        if self.preview_contact_limit == 0 {
            return Err("preview_contact_limit must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = IngestConfig::default();
        assert_eq!(config.preview_contact_limit, 50);
        assert_eq!(config.preview_issue_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let config = IngestConfig {
            allowed_extension: ".csv".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
