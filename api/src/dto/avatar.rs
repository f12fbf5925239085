use serde::{Deserialize, Serialize};
use validator::Validate;

/// Avatar posted as base64 JSON
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AvatarUploadRequest {
    /// Original file name, informational only
    pub filename: Option<String>,

    #[validate(length(min = 1, message = "Only image files are allowed"))]
    pub content_type: String,

    /// Base64 image bytes, optionally as a data URL
    #[validate(length(min = 1, message = "No file uploaded"))]
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarResponse {
    pub avatar_url: String,
}
