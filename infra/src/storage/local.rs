//! Avatar storage on the local filesystem.
//!
//! Files are written under the upload directory, which the HTTP server also
//! serves at the public prefix.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use swp_core::services::AvatarStorageTrait;
use swp_shared::UploadConfig;

use crate::InfrastructureError;

pub struct LocalAvatarStorage {
    upload_dir: PathBuf,
    public_prefix: String,
}

impl LocalAvatarStorage {
    pub fn new(upload_dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(&config.upload_dir, config.public_prefix.clone())
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, InfrastructureError> {
        // Names come from the account services, never from the client
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return Err(InfrastructureError::General(format!(
                "Invalid file name: {}",
                file_name
            )));
        }

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let path = self.upload_dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}

#[async_trait]
impl AvatarStorageTrait for LocalAvatarStorage {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, String> {
        match self.write(file_name, bytes).await {
            Ok(path) => {
                debug!(path = %path.display(), size = bytes.len(), "Avatar stored");
                Ok(format!("{}/{}", self.public_prefix, file_name))
            }
            Err(e) => {
                error!("Failed to store avatar {}: {}", file_name, e);
                Err(e.to_string())
            }
        }
    }
}
