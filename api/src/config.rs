//! HTTP layer settings derived from the application configuration

use std::path::PathBuf;

use swp_shared::{AppConfig, CorsConfig};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub cors: CorsConfig,

    /// Directory avatars are written to and served from
    pub upload_dir: PathBuf,

    /// URL prefix the upload directory is served under
    pub upload_prefix: String,

    /// Largest accepted JSON body in bytes
    pub json_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: CorsConfig::development(),
            upload_dir: PathBuf::from("uploads"),
            upload_prefix: String::from("/uploads"),
            json_limit: 8 * 1024 * 1024,
        }
    }
}

impl ApiConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            cors: config.cors.clone(),
            upload_dir: PathBuf::from(&config.upload.upload_dir),
            upload_prefix: config.upload.public_prefix.trim_end_matches('/').to_string(),
            json_limit: config.server.max_payload_size,
        }
    }
}
