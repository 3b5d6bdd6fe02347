use crate::shared::usecase::UseCase;
use remind_scheduler_infra::{DeliveryError, RemindContext};
use tracing::{debug, error};

/// One poll tick of the scheduler loop: drains every due reminder and
/// attempts a single delivery for each. A reminder is consumed by being
/// popped, so delivery is at most once; failures are logged and never
/// retried.
#[derive(Debug)]
pub struct SendDueRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

#[derive(Debug, Default, PartialEq)]
pub struct SentReminders {
    pub delivered: usize,
    pub failed: usize,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = SentReminders;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueReminders";

    async fn execute(&mut self, ctx: &RemindContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp();
        let due = ctx.repos.pending.pop_due(now).await;
        if due.is_empty() {
            return Ok(SentReminders::default());
        }
        debug!("Found {} due reminders at {}", due.len(), now);

        let mut sent = SentReminders::default();
        for reminder in due {
            let attempt = tokio::time::timeout(
                ctx.config.delivery_timeout,
                ctx.gateway.deliver(&reminder.user_id, &reminder.message),
            )
            .await
            .unwrap_or(Err(DeliveryError::Timeout));

            match attempt {
                Ok(()) => sent.delivered += 1,
                Err(e) => {
                    error!(
                        "Error sending reminder to user {}: {}",
                        reminder.user_id, e
                    );
                    sent.failed += 1;
                }
            }
        }
        Ok(sent)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use remind_scheduler_infra::{ISys, InMemoryGateway};
    use remind_scheduler_domain::{Reminder, UserId};
    use std::sync::Arc;

    struct StaticTimeSys(i64);
    impl ISys for StaticTimeSys {
        fn get_timestamp(&self) -> i64 {
            self.0
        }
    }

    async fn setup_context(now: i64) -> (RemindContext, Arc<InMemoryGateway>) {
        let mut ctx = RemindContext::create_inmemory().await;
        ctx.sys = Arc::new(StaticTimeSys(now));
        let gateway = Arc::new(InMemoryGateway::new());
        ctx.gateway = gateway.clone();
        (ctx, gateway)
    }

    #[tokio::test]
    async fn delivers_due_reminders_once() {
        let (ctx, gateway) = setup_context(1061).await;
        ctx.repos
            .pending
            .schedule(Reminder::new(1060, 42, "drink water"))
            .await
            .unwrap();

        let sent = execute(SendDueRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(
            sent,
            SentReminders {
                delivered: 1,
                failed: 0
            }
        );
        assert_eq!(
            gateway.deliveries(),
            vec![(UserId::Int(42), "drink water".to_string())]
        );

        // Next tick finds nothing; the reminder was consumed.
        let sent = execute(SendDueRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(sent, SentReminders::default());
        assert_eq!(gateway.deliveries().len(), 1);
    }

    #[tokio::test]
    async fn reminder_firing_exactly_now_is_delivered() {
        let (ctx, gateway) = setup_context(1060).await;
        ctx.repos
            .pending
            .schedule(Reminder::new(1060, 42, "drink water"))
            .await
            .unwrap();

        execute(SendDueRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(gateway.deliveries().len(), 1);
    }

    #[tokio::test]
    async fn future_reminders_are_left_pending() {
        let (ctx, gateway) = setup_context(1000).await;
        ctx.repos
            .pending
            .schedule(Reminder::new(1060, 42, "drink water"))
            .await
            .unwrap();

        let sent = execute(SendDueRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(sent, SentReminders::default());
        assert!(gateway.deliveries().is_empty());
        assert_eq!(ctx.repos.pending.len().await, 1);
    }

    #[tokio::test]
    async fn failed_delivery_consumes_the_reminder() {
        let (ctx, gateway) = setup_context(2000).await;
        gateway.fail_to_resolve(UserId::Int(7));
        ctx.repos
            .pending
            .schedule(Reminder::new(1000, 7, "gone"))
            .await
            .unwrap();
        ctx.repos
            .pending
            .schedule(Reminder::new(1500, 42, "still here"))
            .await
            .unwrap();

        let sent = execute(SendDueRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(
            sent,
            SentReminders {
                delivered: 1,
                failed: 1
            }
        );
        // The unresolved reminder is dropped, not re-queued.
        assert_eq!(ctx.repos.pending.len().await, 0);
        assert_eq!(
            gateway.deliveries(),
            vec![(UserId::Int(42), "still here".to_string())]
        );
    }
}
