mod clear_pending_history;
mod drain_pending_history;
mod get_pending_history;

use actix_web::web;
use clear_pending_history::clear_pending_history_controller;
use drain_pending_history::drain_pending_history_controller;
use get_pending_history::get_pending_history_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/history", web::get().to(get_pending_history_controller));
    cfg.route("/history", web::delete().to(clear_pending_history_controller));
    cfg.route(
        "/history/drain",
        web::post().to(drain_pending_history_controller),
    );
}
