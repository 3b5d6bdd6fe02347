use super::{DeliveryError, INotificationGateway};

use remind_scheduler_domain::UserId;
use std::sync::Mutex;

/// Gateway for tests: records every delivery and can be told to treat
/// specific users as unresolvable.
pub struct InMemoryGateway {
    deliveries: Mutex<Vec<(UserId, String)>>,
    unresolvable: Mutex<Vec<UserId>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self {
            deliveries: Mutex::new(Vec::new()),
            unresolvable: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_to_resolve(&self, user_id: UserId) {
        self.unresolvable.lock().unwrap().push(user_id);
    }

    pub fn deliveries(&self) -> Vec<(UserId, String)> {
        self.deliveries.lock().unwrap().clone()
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotificationGateway for InMemoryGateway {
    async fn deliver(&self, user_id: &UserId, message: &str) -> Result<(), DeliveryError> {
        if self.unresolvable.lock().unwrap().contains(user_id) {
            return Err(DeliveryError::Unresolved(user_id.clone()));
        }
        self.deliveries
            .lock()
            .unwrap()
            .push((user_id.clone(), message.to_string()));
        Ok(())
    }
}
