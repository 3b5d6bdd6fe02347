use crate::error::RemindError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remind_scheduler_api_structs::create_reminder::*;
use remind_scheduler_domain::{parse_duration, Reminder, UserId};
use remind_scheduler_infra::RemindContext;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindContext>,
) -> Result<HttpResponse, RemindError> {
    let body = body.0;

    // A parse miss is the caller's mistake, reported synchronously and
    // never logged as a fault. Nothing is scheduled for it.
    let total_seconds = parse_duration(&body.duration_text).ok_or_else(|| {
        RemindError::BadClientData(format!(
            "{} is not a valid time duration. Example: 2 min 30 sec",
            body.duration_text
        ))
    })?;

    let usecase = CreateReminderUseCase {
        user_id: body.user_id,
        total_seconds,
        message: body.message,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| {
            HttpResponse::Created().json(APIResponse::new(reminder, &body.duration_text))
        })
        .map_err(RemindError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: UserId,
    pub total_seconds: u64,
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for RemindError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &RemindContext) -> Result<Self::Response, Self::Error> {
        // Durations saturate at the parser, so the conversion and the
        // addition must saturate too. A wrapped cast would schedule the
        // reminder in the past.
        let total_seconds = i64::try_from(self.total_seconds).unwrap_or(i64::MAX);
        let reminder = Reminder {
            fire_at: ctx.sys.get_timestamp().saturating_add(total_seconds),
            user_id: self.user_id.clone(),
            message: self.message.clone(),
        };

        ctx.repos
            .pending
            .schedule(reminder.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
