use remind_scheduler_domain::{Reminder, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub fire_at: i64,
    pub user_id: UserId,
    pub message: String,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            fire_at: reminder.fire_at,
            user_id: reminder.user_id,
            message: reminder.message,
        }
    }
}
