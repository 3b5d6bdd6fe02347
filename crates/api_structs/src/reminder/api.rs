use crate::reminder::dtos::ReminderDTO;
use remind_scheduler_domain::{Reminder, UserId};
use serde::{Deserialize, Serialize};

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: UserId,
        pub duration_text: String,
        pub message: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub reminder: ReminderDTO,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder, duration_text: &str) -> Self {
            Self {
                message: format!("Reminder set! You will be notified in {}", duration_text),
                reminder: ReminderDTO::new(reminder),
            }
        }
    }
}
