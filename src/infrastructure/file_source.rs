use std::path::Path;

use async_trait::async_trait;
use encoding_rs::WINDOWS_1252;

use crate::domain::error::{AppError, IngestError, Result};

/// Text content of a user-selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub text: String,
}

#[async_trait]
pub trait FileSource: Send + Sync {
    async fn read(&self, path: &Path) -> Result<UploadFile>;
}

/// Reads files from the local disk.
///
/// Only the file name suffix is checked; the content is never sniffed.
pub struct LocalFileSource {
    allowed_extension: String,
}

impl LocalFileSource {
    pub fn new(allowed_extension: impl Into<String>) -> Self {
        Self {
            allowed_extension: allowed_extension.into(),
        }
    }

    fn check_extension(&self, path: &Path) -> Result<String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::NotFound(format!("No file name in {}", path.display())))?;

        let matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&self.allowed_extension))
            .unwrap_or(false);

        if !matches {
            return Err(IngestError::UnsupportedFileType { file_name: name }.into());
        }

        Ok(name)
    }
}

#[async_trait]
impl FileSource for LocalFileSource {
    async fn read(&self, path: &Path) -> Result<UploadFile> {
        let name = self.check_extension(path)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", name, e)))?;

        Ok(UploadFile {
            name,
            text: decode_text(bytes),
        })
    }
}

/// UTF-8 when valid, otherwise Windows-1252 (spreadsheet exports)
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let (text, _, _) = WINDOWS_1252.decode(&bytes);
            tracing::debug!("File is not valid UTF-8, decoded as windows-1252");
            text.into_owned()
        }
    }
}
