use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::NewsletterUrl;
use crate::newsletter_client::NewsletterClient;
use crate::relay::Relay;
use crate::tracking_client::TrackingClient;

/// Global configuration, loaded from `configuration/*.yaml`. See
/// `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub relay: RelaySettings,
}

/// Server configuration
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Outbound side of the relay
#[derive(Deserialize, Clone)]
pub struct RelaySettings {
    /// Applied to each destination separately, so a single request waits at
    /// most this long (both submissions run concurrently)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,

    /// Used by `POST /substack` when the form does not send `substackUrl`.
    /// `POST /subscribe` never falls back to it.
    #[serde(default)]
    pub default_newsletter_url: Option<String>,
}

impl RelaySettings {
    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_milliseconds) }

    pub fn default_newsletter_url(&self) -> Option<NewsletterUrl> {
        self.default_newsletter_url
            .clone()
            .and_then(NewsletterUrl::parse)
    }

    pub fn relay(&self) -> Result<Relay, reqwest::Error> {
        let timeout = self.timeout();
        Ok(Relay::new(
            TrackingClient::new(timeout)?,
            NewsletterClient::new(timeout)?,
        ))
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid environment: {e}")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`:
/// `base.yaml`, then `{local,production}.yaml` (picked by `APP_ENVIRONMENT`),
/// then `APP_`-prefixed env vars.
///
/// `APP_APPLICATION__PORT=5001` -> `Settings.application.port`
///
/// Env vars are always strings, hence `serde-aux` for the numeric fields.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Message(format!("could not get current dir: {e}")))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
