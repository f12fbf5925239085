//! Account cleanup service for periodic removal of unverified signups
//!
//! Signups that never confirmed their verification code are deleted once
//! they are older than the configured age. The task is started and stopped
//! explicitly by the server process.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{error, info, warn};

use swp_shared::CleanupConfig;

use crate::errors::DomainError;
use crate::repositories::UserRepository;

/// Configuration for the account cleanup service
#[derive(Debug, Clone)]
pub struct AccountCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Age after which an unverified account is removed (in seconds)
    pub unverified_ttl_seconds: i64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for AccountCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 600,       // Run every 10 minutes
            unverified_ttl_seconds: 600, // Keep unverified signups for 10 minutes
            enabled: true,
        }
    }
}

impl From<&CleanupConfig> for AccountCleanupConfig {
    fn from(config: &CleanupConfig) -> Self {
        Self {
            interval_seconds: config.interval_seconds,
            unverified_ttl_seconds: config.unverified_ttl_seconds,
            enabled: config.enabled,
        }
    }
}

/// Service deleting stale unverified accounts
pub struct AccountCleanupService<U: UserRepository + 'static> {
    repository: Arc<U>,
    config: AccountCleanupConfig,
}

impl<U: UserRepository> AccountCleanupService<U> {
    pub fn new(repository: Arc<U>, config: AccountCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(CleanupResult)` - How many accounts were removed
    /// * `Err(DomainError)` - If the repository call fails
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        let cutoff = Utc::now() - Duration::seconds(self.config.unverified_ttl_seconds);
        info!(%cutoff, "Deleting unverified accounts created before cutoff");

        let deleted = self.repository.delete_unverified_before(cutoff).await?;
        info!(deleted, "Unverified account cleanup completed");

        Ok(CleanupResult {
            unverified_accounts_deleted: deleted,
        })
    }

    /// Start the cleanup service as a background task
    ///
    /// The first cycle runs one interval after start. Returns `None` when
    /// cleanup is disabled; abort the handle to stop the task.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Account cleanup service is disabled");
            return None;
        }

        let period = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        Some(tokio::spawn(async move {
            info!(
                "Account cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = interval_at(Instant::now() + period, period);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("Account cleanup cycle failed: {}", e);
                }
            }
        }))
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    /// Number of unverified accounts deleted
    pub unverified_accounts_deleted: u64,
}
