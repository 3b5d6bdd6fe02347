use super::IReminderStore;

use anyhow::Context;
use remind_scheduler_domain::{Reminder, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Stores all pending reminders as a JSON array of
/// `[fire_at, user_id, message]` arrays at a fixed path. `fire_at` is
/// written as an integer but accepted as either an integer or a float
/// on load.
pub struct FileReminderStore {
    path: PathBuf,
}

impl FileReminderStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderRaw(Number, UserId, String);

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        let fire_at = raw
            .0
            .as_i64()
            .or_else(|| raw.0.as_f64().map(|secs| secs as i64))
            .unwrap_or_default();
        Self {
            fire_at,
            user_id: raw.1,
            message: raw.2,
        }
    }
}

impl From<&Reminder> for ReminderRaw {
    fn from(reminder: &Reminder) -> Self {
        Self(
            Number::from(reminder.fire_at),
            reminder.user_id.clone(),
            reminder.message.clone(),
        )
    }
}

#[async_trait::async_trait]
impl IReminderStore for FileReminderStore {
    async fn load(&self) -> anyhow::Result<Vec<Reminder>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Unable to read reminder file: {}", self.path.display())
                })
            }
        };

        let raw: Vec<ReminderRaw> = serde_json::from_slice(&bytes).with_context(|| {
            format!("Reminder file is corrupt: {}", self.path.display())
        })?;
        Ok(raw.into_iter().map(Into::into).collect())
    }

    async fn save(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        let raw = reminders.iter().map(ReminderRaw::from).collect::<Vec<_>>();
        let body = serde_json::to_vec(&raw)?;

        // Write to a sibling temp file and rename it over the target so a
        // crash mid-write can never leave a half-written reminder file.
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &body).await.with_context(|| {
            format!("Unable to write reminder file: {}", tmp_path.display())
        })?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| {
                format!("Unable to replace reminder file: {}", self.path.display())
            })?;
        Ok(())
    }
}
