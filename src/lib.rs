pub mod configuration;
pub mod domain;
pub mod newsletter_client;
pub mod relay;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod tracking_client;
pub mod utils;
