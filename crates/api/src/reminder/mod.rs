mod cancel_reminder;
pub mod handle_fire;
mod schedule_reminder;

use actix_web::web;
use cancel_reminder::cancel_reminder_controller;
use schedule_reminder::schedule_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(schedule_reminder_controller));
    cfg.route(
        "/reminders/{notification_id}",
        web::delete().to(cancel_reminder_controller),
    );
}
