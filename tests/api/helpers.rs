use once_cell::sync::Lazy;
use reqwest::Method;
use subscription_relay::configuration::get_configuration;
use subscription_relay::configuration::Settings;
use subscription_relay::startup::Application;
use subscription_relay::telemetry::get_subscriber;
use subscription_relay::telemetry::init_subscriber;
use wiremock::MockServer;

/// Init the tracing subscriber once for the whole test binary.
///
/// To opt in to verbose logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    // the two sinks have different types, hence the duplicated arms
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber).expect("init subscriber");
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber).expect("init subscriber");
        }
    };
});

pub struct TestApp {
    pub addr: String,
    /// Stands in for the tracking endpoint (Journity)
    pub tracking_server: MockServer,
    /// Stands in for the newsletter endpoint (Substack)
    pub newsletter_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_subscribe(
        &self,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/subscribe", self.addr))
            .json(body)
            .send()
            .await
            .expect("execute request")
    }

    pub async fn post_substack(
        &self,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/substack", self.addr))
            .json(body)
            .send()
            .await
            .expect("execute request")
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
    ) -> reqwest::Response {
        self.api_client
            .request(method, format!("{}{path}", self.addr))
            .send()
            .await
            .expect("execute request")
    }

    /// `journityConfig` pointing at the mock tracking endpoint
    pub fn journity_config(&self) -> serde_json::Value {
        serde_json::json!({
            "url": format!("{}/v1/email-form", self.tracking_server.uri()),
            "aid": "x",
            "ctaHashId": "abc123",
        })
    }

    /// `substackUrl` pointing at the mock newsletter endpoint
    pub fn substack_url(&self) -> String { self.newsletter_server.uri() }
}

/// Spawn the app on a random port, with both destinations mocked and no
/// default newsletter url.
pub async fn spawn_app() -> TestApp { spawn_app_with(|_, _| {}).await }

/// Like `spawn_app`, with the default newsletter url pointing at the mock
/// newsletter endpoint
pub async fn spawn_app_with_default_newsletter_url() -> TestApp {
    spawn_app_with(|cfg, newsletter_server| {
        cfg.relay.default_newsletter_url = Some(format!("{}/subscribe", newsletter_server.uri()));
    })
    .await
}

async fn spawn_app_with(configure: impl FnOnce(&mut Settings, &MockServer)) -> TestApp {
    Lazy::force(&TRACING);

    let tracking_server = MockServer::start().await;
    let newsletter_server = MockServer::start().await;

    let cfg = {
        let mut cfg = get_configuration().expect("read configuration");
        // port 0: the OS assigns a random available port
        cfg.application.port = 0;
        cfg.relay.timeout_milliseconds = 2000;
        cfg.relay.default_newsletter_url = None;
        configure(&mut cfg, &newsletter_server);
        cfg
    };

    let app = Application::build(cfg).await.expect("build app");
    let addr = format!("http://127.0.0.1:{}", app.get_port());
    tokio::spawn(app.run_until_stopped());

    TestApp {
        addr,
        tracking_server,
        newsletter_server,
        api_client: reqwest::Client::new(),
    }
}
