//! Files uploaded to the multipart tools

use std::path::Path;

use reqwest::multipart::Part;

use creatorkit_common::{Error, Result};

pub const PDF_MIME: &str = "application/pdf";

/// An in-memory file ready to be sent as a multipart part
#[derive(Clone, PartialEq, Eq, serde::Serialize)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, taking the MIME type from its extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Validation(format!("Invalid file path: {}", path.display())))?
            .to_string();

        let mime_type = mime_guess::from_path(path)
            .first()
            .ok_or_else(|| Error::Validation(format!("Unsupported file type: {}", file_name)))?
            .essence_str()
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::Validation(format!("Could not read {}: {}", path.display(), e)))?;

        Ok(Self::new(file_name, mime_type, bytes))
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME
    }

    pub fn into_part(self) -> Result<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| Error::Validation(format!("Invalid MIME type: {}", e)))
    }
}
