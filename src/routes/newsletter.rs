use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;
use serde::Serialize;

use super::RelayError;
use crate::domain::DestinationOutcome;
use crate::domain::NewsletterUrl;
use crate::domain::SubscriberEmail;
use crate::domain::ValidationError;
use crate::relay::Relay;
use crate::startup::DefaultNewsletterUrl;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterBody {
    email: Option<String>,
    substack_url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewsletterResponse {
    #[serde(flatten)]
    outcome: DestinationOutcome,
    /// Absent when the endpoint could not be reached
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
}

/// `POST /substack`
///
/// Newsletter endpoint only. `substackUrl` falls back to the configured
/// default. Responds 200 with the outcome and the status code the endpoint
/// answered with, or 500 if the endpoint could not be reached.
#[tracing::instrument(name = "Relaying new newsletter subscriber", skip(body, relay, default_url))]
pub async fn subscribe_newsletter(
    body: web::Json<NewsletterBody>,
    relay: web::Data<Relay>,
    default_url: web::Data<DefaultNewsletterUrl>,
) -> Result<HttpResponse, RelayError> {
    let body = body.into_inner();
    let email = SubscriberEmail::parse(body.email)?;
    let url = body
        .substack_url
        .and_then(NewsletterUrl::parse)
        .or_else(|| default_url.0.clone())
        .ok_or(ValidationError::MissingNewsletterUrl)?;

    let (outcome, status_code) = relay.relay_newsletter(&email, &url).await;
    let resp = NewsletterResponse {
        outcome,
        status_code: status_code.map(|s| s.as_u16()),
    };
    Ok(match resp.status_code {
        Some(_) => HttpResponse::Ok().json(resp),
        None => HttpResponse::InternalServerError().json(resp),
    })
}
