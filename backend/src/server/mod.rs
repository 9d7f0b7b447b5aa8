//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing::info;

use smart_icon_backend::RequestTracing;
#[cfg(debug_assertions)]
use smart_icon_backend::doc::ApiDoc;
use smart_icon_backend::inbound::http;
use smart_icon_backend::inbound::http::health::HealthState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Bind the listener and return the running server.
///
/// Readiness is marked once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .configure(http::configure);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        // Outermost last: CORS answers preflights before tracing runs.
        app.wrap(RequestTracing).wrap(Cors::permissive())
    })
    .bind(config.bind_addr)?;

    info!(addrs = ?server.addrs(), "listening");
    health_state.mark_ready();
    Ok(server.run())
}
