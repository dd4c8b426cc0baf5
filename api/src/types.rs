//! Wire types shared across endpoint modules.

use reqwest::multipart::Part;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Generic `{ success, message }` acknowledgement the backend returns for
/// most mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    /// Whether the operation succeeded
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable detail
    #[serde(default)]
    pub message: Option<String>,
}

/// An in-memory file destined for a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    /// File name reported to the backend
    pub file_name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// Optional MIME type; the backend sniffs when absent
    pub mime_type: Option<String>,
}

impl FileUpload {
    /// Create an upload with an unspecified MIME type
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime_type: None,
        }
    }

    /// Set the MIME type
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Convert into a multipart part
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the MIME type string is invalid.
    pub fn into_part(self) -> Result<Part, ApiError> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime_type {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(|e| ApiError::Transport(e.to_string())),
            None => Ok(part),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_defaults_to_failure() {
        let ack: AckResponse = serde_json::from_str("{}").expect("valid json");
        assert!(!ack.success);
        assert_eq!(ack.message, None);
    }

    #[test]
    fn file_upload_builds_a_part() {
        let upload = FileUpload::new("photo.jpg", vec![1, 2, 3]).with_mime_type("image/jpeg");
        assert!(upload.into_part().is_ok());
    }

    #[test]
    fn bad_mime_type_is_rejected() {
        let upload = FileUpload::new("photo.jpg", vec![1, 2, 3]).with_mime_type("not a mime");
        assert!(upload.into_part().is_err());
    }
}
