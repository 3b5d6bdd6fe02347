use actix_web::{web, HttpResponse};
use remind_scheduler_api_structs::get_service_health::*;
use remind_scheduler_infra::RemindContext;

async fn status(ctx: web::Data<RemindContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        pending_reminders: ctx.repos.pending.len().await,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
