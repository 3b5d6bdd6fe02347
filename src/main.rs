mod telemetry;

use remind_scheduler_api::Application;
use remind_scheduler_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("remind_scheduler".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await?;

    let app = Application::new(context).await?;
    app.start().await?;
    Ok(())
}
