mod get_current_owner;
mod set_current_owner;

use actix_web::web;
use get_current_owner::get_current_owner_controller;
use set_current_owner::set_current_owner_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/owner", web::get().to(get_current_owner_controller));
    cfg.route("/owner", web::put().to(set_current_owner_controller));
}
