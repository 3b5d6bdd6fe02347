mod config;
mod gateway;
mod repos;
mod system;

pub use config::Config;
pub use gateway::{DeliveryError, INotificationGateway, InMemoryGateway, WebhookGateway};
pub use repos::{FileReminderStore, IReminderStore, InMemoryReminderStore, PendingReminders, Repos};
pub use system::ISys;
use system::RealSys;

use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct RemindContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub gateway: Arc<dyn INotificationGateway>,
}

impl RemindContext {
    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = Repos::create_file(config.reminder_file_path.clone()).await?;
        info!(
            "Loaded {} reminders from file",
            repos.pending.len().await
        );

        if config.webhook_url.is_none() {
            warn!("WEBHOOK_URL is not set. Due reminders cannot be delivered.");
        }
        let gateway = Arc::new(WebhookGateway::new(
            config.webhook_url.clone(),
            config.webhook_key.clone(),
            config.delivery_timeout,
        ));

        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            gateway,
        })
    }

    /// Context over in-memory store and gateway, used in tests
    pub async fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory().await,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            gateway: Arc::new(InMemoryGateway::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment.
/// Fails when the reminder file exists but cannot be parsed, since
/// starting with an empty queue would mask data loss.
pub async fn setup_context() -> anyhow::Result<RemindContext> {
    RemindContext::create(Config::new()).await
}
