mod error;
mod history;
mod job_schedulers;
mod owner;
mod recovery_queue;
mod reminder;
mod shared;
mod status;
mod system;

use actix_web::{dev::Server, middleware, web, App, HttpServer};
use bill_reminder_infra::{FiredAlarms, ReminderContext};
use job_schedulers::{start_boot_recovery, start_fire_listener};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    history::configure_routes(cfg);
    owner::configure_routes(cfg);
    recovery_queue::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
    system::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(
        context: ReminderContext,
        fired_alarms: FiredAlarms,
    ) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context, fired_alarms);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: ReminderContext, fired_alarms: FiredAlarms) {
        start_fire_listener(context.clone(), fired_alarms);
        start_boot_recovery(context);
    }

    async fn configure_server(context: ReminderContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
