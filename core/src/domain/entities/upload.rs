//! Decoded avatar image awaiting storage.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::{DomainError, DomainResult};

/// Accepted image MIME types and the file extension each is stored under
pub const ALLOWED_AVATAR_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub extension: &'static str,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    /// Decode a base64 payload, checking its type and size
    pub fn from_base64(content_type: &str, data: &str, max_bytes: usize) -> DomainResult<Self> {
        if data.trim().is_empty() {
            return Err(DomainError::validation("No file uploaded"));
        }

        let content_type = content_type.trim().to_ascii_lowercase();
        let extension = ALLOWED_AVATAR_TYPES
            .iter()
            .find(|(mime, _)| *mime == content_type)
            .map(|(_, ext)| *ext)
            .ok_or_else(|| DomainError::validation("Only image files are allowed"))?;

        // Accept data URLs as well as bare base64
        let encoded = match data.split_once(";base64,") {
            Some((_, payload)) => payload,
            None => data,
        };

        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|_| DomainError::validation("Avatar data is not valid base64"))?;

        if bytes.is_empty() {
            return Err(DomainError::validation("No file uploaded"));
        }
        if bytes.len() > max_bytes {
            return Err(DomainError::validation(format!(
                "Avatar must not exceed {} bytes",
                max_bytes
            )));
        }

        Ok(Self { extension, bytes })
    }

    /// Stored file name for an account, unique per upload
    pub fn file_name(&self, owner: &str, timestamp_millis: i64) -> String {
        format!("{}-{}.{}", owner, timestamp_millis, self.extension)
    }
}
