use bill_reminder_api::Application;
use bill_reminder_infra::{setup_context, Config};
use bill_reminder_sdk::ReminderSDK;
use std::time::Duration;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, ReminderSDK, String) {
    let (mut ctx, fired_alarms) = setup_context();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx, fired_alarms)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = ReminderSDK::new(address.clone());
    (app, sdk, address)
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Polls `condition` for up to two seconds
pub async fn eventually<F, Fut>(condition: F) -> bool
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..100 {
        if condition().await {
            return true;
        }
        actix_web::rt::time::sleep(Duration::from_millis(20)).await;
    }
    false
}
