mod file;
mod inmemory;

pub use file::FileReminderStore;
pub use inmemory::InMemoryReminderStore;

use remind_scheduler_domain::Reminder;

#[async_trait::async_trait]
pub trait IReminderStore: Send + Sync {
    /// Reads the full persisted sequence. An absent file is an empty
    /// sequence; a file that exists but cannot be parsed is an error,
    /// never silently an empty sequence.
    async fn load(&self) -> anyhow::Result<Vec<Reminder>>;

    /// Atomically replaces the persisted sequence. There are no partial
    /// or append writes.
    async fn save(&self, reminders: &[Reminder]) -> anyhow::Result<()>;
}
