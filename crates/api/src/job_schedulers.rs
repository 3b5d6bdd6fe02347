use crate::reminder::send_due_reminders::SendDueRemindersUseCase;
use crate::shared::usecase::execute;
use remind_scheduler_infra::RemindContext;
use tokio::time::{interval, MissedTickBehavior};

/// Starts the scheduler loop: one poll per `poll_interval` for the
/// lifetime of the process. The poll runs inline on the interval task,
/// so a tick can never overlap a poll that is still in flight, and
/// ticks that fire during a long poll are skipped rather than bursted.
pub fn start_send_reminders_job(ctx: RemindContext) {
    actix_web::rt::spawn(async move {
        let mut poll_interval = interval(ctx.config.poll_interval);
        poll_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            poll_interval.tick().await;

            let usecase = SendDueRemindersUseCase;
            let _ = execute(usecase, &ctx).await;
        }
    });
}
