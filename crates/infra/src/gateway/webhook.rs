use super::{DeliveryError, INotificationGateway};

use remind_scheduler_domain::UserId;
use serde::Serialize;
use std::time::Duration;

const WEBHOOK_KEY_HEADER: &str = "remind-scheduler-webhook-key";

/// Delivers reminders by POSTing them to a configured webhook endpoint.
/// The surrounding chat integration is expected to receive the payload
/// and forward the message to the user.
pub struct WebhookGateway {
    client: reqwest::Client,
    url: Option<String>,
    key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReminderNotification<'a> {
    user_id: &'a UserId,
    message: &'a str,
}

impl WebhookGateway {
    pub fn new(url: Option<String>, key: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Webhook http client to be created");
        Self { client, url, key }
    }

    fn resolve(&self, user_id: &UserId) -> Result<&str, DeliveryError> {
        self.url
            .as_deref()
            .ok_or_else(|| DeliveryError::Unresolved(user_id.clone()))
    }
}

#[async_trait::async_trait]
impl INotificationGateway for WebhookGateway {
    async fn deliver(&self, user_id: &UserId, message: &str) -> Result<(), DeliveryError> {
        let address = self.resolve(user_id)?;

        let mut request = self
            .client
            .post(address)
            .json(&ReminderNotification { user_id, message });
        if let Some(key) = &self.key {
            request = request.header(WEBHOOK_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DeliveryError::Timeout
            } else {
                DeliveryError::Send(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(DeliveryError::Send(format!(
                "Webhook returned status: {}",
                response.status()
            )));
        }
        Ok(())
    }
}
