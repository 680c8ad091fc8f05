use subscription_relay::configuration::get_configuration;
use subscription_relay::startup::Application;
use subscription_relay::telemetry::get_subscriber;
use subscription_relay::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("subscription-relay", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let cfg = get_configuration()?;
    let app = Application::build(cfg).await?;
    tracing::info!(port = app.get_port(), "relay listening");
    app.run_until_stopped().await?;

    Ok(())
}
