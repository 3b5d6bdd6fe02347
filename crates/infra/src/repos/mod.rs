mod pending;
mod reminder_store;

pub use pending::PendingReminders;
pub use reminder_store::{FileReminderStore, IReminderStore, InMemoryReminderStore};

use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub pending: Arc<PendingReminders>,
}

impl Repos {
    pub async fn create_file(path: PathBuf) -> anyhow::Result<Self> {
        let store = Arc::new(FileReminderStore::new(path));
        let pending = PendingReminders::load(store)
            .await
            .context("Reminder store must be readable at startup")?;
        Ok(Self {
            pending: Arc::new(pending),
        })
    }

    pub async fn create_inmemory() -> Self {
        let store = Arc::new(InMemoryReminderStore::new());
        let pending = PendingReminders::load(store)
            .await
            .expect("In memory reminder store to be loadable");
        Self {
            pending: Arc::new(pending),
        }
    }
}
