use super::IReminderStore;

use remind_scheduler_domain::{Reminder, ReminderQueue};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

/// All pending reminders: the in-memory priority queue together with the
/// store that mirrors it on disk. The single mutex makes an intake push
/// and an in-progress pop-and-persist mutually exclusive, so no store
/// write can drop the other operation's effect.
pub struct PendingReminders {
    queue: Mutex<ReminderQueue>,
    store: Arc<dyn IReminderStore>,
}

impl PendingReminders {
    /// Rebuilds the queue from the store. A store that fails to load is
    /// an error for the caller to surface, not an empty queue.
    pub async fn load(store: Arc<dyn IReminderStore>) -> anyhow::Result<Self> {
        let reminders = store.load().await?;
        Ok(Self {
            queue: Mutex::new(ReminderQueue::from_reminders(reminders)),
            store,
        })
    }

    /// Persists the new reminder and then inserts it into the queue. The
    /// store write happens first so a failure leaves both sides unchanged.
    pub async fn schedule(&self, reminder: Reminder) -> anyhow::Result<()> {
        let mut queue = self.queue.lock().await;

        let mut reminders = queue.snapshot();
        reminders.push(reminder.clone());
        reminders.sort();
        self.store.save(&reminders).await?;

        queue.push(reminder);
        Ok(())
    }

    /// Removes and returns every due reminder in ascending fire-time
    /// order. The store is rewritten after each removal, so an
    /// interruption mid-batch leaves it consistent with what has actually
    /// been taken out of the queue.
    pub async fn pop_due(&self, now: i64) -> Vec<Reminder> {
        let mut queue = self.queue.lock().await;

        let mut due = Vec::new();
        while let Some(reminder) = queue.pop_next_due(now) {
            if let Err(e) = self.store.save(&queue.snapshot()).await {
                // The reminder is already out of the queue. Dropping the
                // rewrite is the at-most-once direction of the tradeoff.
                error!("Unable to persist reminders after pop: {:?}", e);
            }
            due.push(reminder);
        }
        due
    }

    pub async fn len(&self) -> usize {
        self.queue.lock().await.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repos::InMemoryReminderStore;

    #[tokio::test]
    async fn scheduled_reminder_survives_a_restart() {
        let store = Arc::new(InMemoryReminderStore::new());

        let pending = PendingReminders::load(store.clone()).await.unwrap();
        pending
            .schedule(Reminder::new(1060, 42, "drink water"))
            .await
            .unwrap();

        // Same store, fresh process.
        let restarted = PendingReminders::load(store).await.unwrap();
        assert_eq!(restarted.len().await, 1);
        let due = restarted.pop_due(1060).await;
        assert_eq!(due, vec![Reminder::new(1060, 42, "drink water")]);
    }

    #[tokio::test]
    async fn pop_due_drains_in_order_and_persists_each_removal() {
        let store = Arc::new(InMemoryReminderStore::new());
        let pending = PendingReminders::load(store.clone()).await.unwrap();

        for fire_at in [50, 10, 30, 200] {
            pending
                .schedule(Reminder::new(fire_at, 1, "m"))
                .await
                .unwrap();
        }

        let due = pending.pop_due(100).await;
        let fire_times = due.iter().map(|r| r.fire_at).collect::<Vec<_>>();
        assert_eq!(fire_times, vec![10, 30, 50]);

        // Only the undelivered reminder remains, in memory and on disk.
        assert_eq!(pending.len().await, 1);
        let stored = store.load().await.unwrap();
        assert_eq!(stored, vec![Reminder::new(200, 1, "m")]);
    }

    #[tokio::test]
    async fn pop_due_rewrites_the_store_after_every_single_removal() {
        struct RecordingStore {
            reminders: Vec<Reminder>,
            saves: std::sync::Mutex<Vec<Vec<Reminder>>>,
        }

        #[async_trait::async_trait]
        impl IReminderStore for RecordingStore {
            async fn load(&self) -> anyhow::Result<Vec<Reminder>> {
                Ok(self.reminders.clone())
            }
            async fn save(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
                self.saves.lock().unwrap().push(reminders.to_vec());
                Ok(())
            }
        }

        let store = Arc::new(RecordingStore {
            reminders: vec![
                Reminder::new(50, 1, "c"),
                Reminder::new(10, 1, "a"),
                Reminder::new(30, 1, "b"),
            ],
            saves: std::sync::Mutex::new(Vec::new()),
        });

        let pending = PendingReminders::load(store.clone()).await.unwrap();
        let due = pending.pop_due(100).await;
        assert_eq!(due.len(), 3);

        // One rewrite per removal, each one reminder shorter, earliest
        // removed first. An interruption between any two of them leaves
        // the store matching exactly what is still queued.
        let saves = store
            .saves
            .lock()
            .unwrap()
            .iter()
            .map(|save| save.iter().map(|r| r.fire_at).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(saves, vec![vec![30, 50], vec![50], vec![]]);
    }

    #[tokio::test]
    async fn load_establishes_heap_order_over_stored_reminders() {
        let store = Arc::new(InMemoryReminderStore::with_reminders(vec![
            Reminder::new(50, 1, "c"),
            Reminder::new(10, 1, "a"),
            Reminder::new(30, 1, "b"),
        ]));

        let pending = PendingReminders::load(store).await.unwrap();
        let due = pending.pop_due(100).await;
        let fire_times = due.iter().map(|r| r.fire_at).collect::<Vec<_>>();
        assert_eq!(fire_times, vec![10, 30, 50]);
    }

    #[tokio::test]
    async fn popped_reminders_never_come_back() {
        let store = Arc::new(InMemoryReminderStore::new());
        let pending = PendingReminders::load(store).await.unwrap();
        pending.schedule(Reminder::new(10, 1, "m")).await.unwrap();

        assert_eq!(pending.pop_due(10).await.len(), 1);
        assert!(pending.pop_due(10).await.is_empty());
        assert!(pending.pop_due(1000).await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_store_fails_the_load() {
        struct CorruptStore;

        #[async_trait::async_trait]
        impl IReminderStore for CorruptStore {
            async fn load(&self) -> anyhow::Result<Vec<Reminder>> {
                Err(anyhow::anyhow!("corrupt"))
            }
            async fn save(&self, _reminders: &[Reminder]) -> anyhow::Result<()> {
                Ok(())
            }
        }

        assert!(PendingReminders::load(Arc::new(CorruptStore)).await.is_err());
    }
}
