mod inmemory;
mod webhook;

pub use inmemory::InMemoryGateway;
pub use webhook::WebhookGateway;

use remind_scheduler_domain::UserId;
use thiserror::Error;

/// Why a delivery attempt failed. Failed deliveries are logged and the
/// reminder stays consumed; there is no retry.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("No deliverable address found for user: {0}")]
    Unresolved(UserId),
    #[error("Delivery failed: {0}")]
    Send(String),
    #[error("Delivery attempt timed out")]
    Timeout,
}

/// Boundary to the external system that resolves a recipient to a
/// deliverable address and performs the actual send.
#[async_trait::async_trait]
pub trait INotificationGateway: Send + Sync {
    async fn deliver(&self, user_id: &UserId, message: &str) -> Result<(), DeliveryError>;
}
