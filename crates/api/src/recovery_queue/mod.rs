mod clear_pending_recovery_queue;
mod get_pending_recovery_queue;

use actix_web::web;
use clear_pending_recovery_queue::clear_pending_recovery_queue_controller;
use get_pending_recovery_queue::get_pending_recovery_queue_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/recovery-queue",
        web::get().to(get_pending_recovery_queue_controller),
    );
    cfg.route(
        "/recovery-queue",
        web::delete().to(clear_pending_recovery_queue_controller),
    );
}
