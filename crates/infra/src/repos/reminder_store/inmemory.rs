use super::IReminderStore;

use remind_scheduler_domain::Reminder;
use std::sync::Mutex;

pub struct InMemoryReminderStore {
    reminders: Mutex<Vec<Reminder>>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: Mutex::new(reminders),
        }
    }
}

impl Default for InMemoryReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderStore for InMemoryReminderStore {
    async fn load(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(self.reminders.lock().unwrap().clone())
    }

    async fn save(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        *self.reminders.lock().unwrap() = reminders.to_vec();
        Ok(())
    }
}
