//! HTTP server assembly.

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Bind the listener and start the server without awaiting it.
///
/// The returned [`Server`] is the start/stop pair for embedding: await it
/// to serve until shutdown, or keep its [`handle`](Server::handle) to stop
/// it from a test harness.
pub fn run(config: &AppConfig, state: AppState) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}
