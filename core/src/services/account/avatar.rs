//! Avatar upload shared by users and admins.

use chrono::Utc;
use tracing::error;
use uuid::Uuid;

use crate::domain::entities::AvatarUpload;
use crate::errors::{DomainError, DomainResult};

use super::traits::AvatarStorageTrait;

/// Decode and store an avatar for `owner`, returning its public URL
pub(crate) async fn store_avatar(
    storage: &dyn AvatarStorageTrait,
    owner: Uuid,
    content_type: &str,
    data: &str,
    max_bytes: usize,
) -> DomainResult<String> {
    let upload = AvatarUpload::from_base64(content_type, data, max_bytes)?;
    let file_name = upload.file_name(&owner.to_string(), Utc::now().timestamp_millis());

    storage.store(&file_name, &upload.bytes).await.map_err(|e| {
        error!(%owner, "Failed to store avatar: {}", e);
        DomainError::internal("Error uploading avatar")
    })
}
