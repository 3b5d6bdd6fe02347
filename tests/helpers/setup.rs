use remind_scheduler_api::Application;
use remind_scheduler_infra::RemindContext;

pub struct TestApp {
    pub address: String,
}

// Launch the application as a background task
pub async fn spawn_app_with_ctx(mut ctx: RemindContext) -> TestApp {
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp { address }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_ctx(RemindContext::create_inmemory().await).await
}
