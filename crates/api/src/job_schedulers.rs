use crate::{
    reminder::handle_fire::HandleFireUseCase, shared::usecase::execute,
    system::recover_alarms::RecoverAlarmsUseCase,
};
use bill_reminder_domain::ReminderPayload;
use bill_reminder_infra::{FiredAlarms, ReminderContext};
use tracing::warn;

/// Handles every alarm that goes off, each one on its own task so a slow
/// event never delays the next one
pub fn start_fire_listener(ctx: ReminderContext, mut fired_alarms: FiredAlarms) {
    actix_web::rt::spawn(async move {
        while let Some(payload) = fired_alarms.recv().await {
            ctx.alarms.mark_fired(&payload).await;
            let context = ctx.clone();
            actix_web::rt::spawn(handle_fire(context, payload));
        }
        warn!("The alarm service stopped, no more reminders will fire");
    });
}

async fn handle_fire(context: ReminderContext, payload: ReminderPayload) {
    let usecase = HandleFireUseCase { payload };
    // Failures are logged by the executor
    let _ = execute(usecase, &context).await;
}

/// A fresh process has no armed alarms, same as after a reboot
pub fn start_boot_recovery(ctx: ReminderContext) {
    actix_web::rt::spawn(async move {
        let _ = execute(RecoverAlarmsUseCase, &ctx).await;
    });
}
