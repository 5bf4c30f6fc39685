pub mod recover_alarms;

use actix_web::web;
use recover_alarms::boot_completed_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/system/boot-completed",
        web::post().to(boot_completed_controller),
    );
}
