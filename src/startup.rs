use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::web;
use actix_web::web::Data;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::domain::NewsletterUrl;
use crate::relay::Relay;
use crate::routes::allow_any_origin;
use crate::routes::health_check;
use crate::routes::json_config;
use crate::routes::method_not_allowed;
use crate::routes::preflight;
use crate::routes::subscribe;
use crate::routes::subscribe_newsletter;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener and build the relay from `cfg`. Everything a request
    /// handler needs is derived here; handlers never read the environment.
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // port 0 means the OS picks one; remember which
        let port = listener.local_addr()?.port();

        let relay = cfg.relay.relay()?;
        let default_url = DefaultNewsletterUrl(cfg.relay.default_newsletter_url());

        let server = run(listener, relay, default_url)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// Newsletter url used by `POST /substack` when the form doesn't send one
/// (wrapped so it can't be confused with other `Data<Option<..>>`)
pub struct DefaultNewsletterUrl(pub Option<NewsletterUrl>);

/// The server is not responsible for binding to an address, it only listens to
/// an already bound address.
///
/// Declares all API endpoints.
pub fn run(
    listener: TcpListener,
    relay: Relay,
    default_url: DefaultNewsletterUrl,
) -> Result<Server, std::io::Error> {
    // `Data` is an `Arc`; every worker gets a clone of the same relay (and
    // thus the same connection pools)
    let relay = Data::new(relay);
    let default_url = Data::new(default_url);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(allow_any_origin())
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/subscribe")
                    .route(web::post().to(subscribe))
                    .route(web::method(Method::OPTIONS).to(preflight))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/substack")
                    .route(web::post().to(subscribe_newsletter))
                    .route(web::method(Method::OPTIONS).to(preflight))
                    .default_service(web::to(method_not_allowed)),
            )
            .app_data(json_config())
            .app_data(relay.clone())
            .app_data(default_url.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
