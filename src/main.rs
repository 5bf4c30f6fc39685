mod telemetry;

use bill_reminder_api::Application;
use bill_reminder_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("bill_reminder_server".into(), "info".into());
    init_subscriber(subscriber);

    let (context, fired_alarms) = setup_context();

    let app = Application::new(context, fired_alarms).await?;
    app.start().await
}
