use std::fmt::Debug;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use serde::Deserialize;

use crate::domain::NewsletterUrl;
use crate::domain::PrimaryDestination;
use crate::domain::SubscriberEmail;
use crate::domain::SubscriptionRequest;
use crate::domain::ValidationError;
use crate::relay::Relay;
use crate::utils::error_chain_fmt;

/// Body sent by the subscription form. Every field is optional at this stage;
/// presence is checked when converting into `SubscriptionRequest`, so that a
/// missing email gives our own 400 rather than a deserialization error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeBody {
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    journity_config: Option<JournityConfig>,
    substack_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournityConfig {
    url: Option<String>,
    aid: Option<String>,
    cta_hash_id: Option<String>,
}

impl TryFrom<SubscribeBody> for SubscriptionRequest {
    type Error = ValidationError;
    fn try_from(value: SubscribeBody) -> Result<Self, Self::Error> {
        let email = SubscriberEmail::parse(value.email)?;
        let primary = value
            .journity_config
            .and_then(|c| PrimaryDestination::parse(c.url, c.aid, c.cta_hash_id));
        let secondary = value.substack_url.and_then(NewsletterUrl::parse);
        Ok(Self {
            email,
            first_name: value.first_name,
            last_name: value.last_name,
            primary,
            secondary,
        })
    }
}

/// Errors that stop a request before any destination is contacted. Displayed
/// to the caller as `{ "error": "<message>" }`.
#[derive(thiserror::Error)]
pub enum RelayError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Invalid JSON body")]
    InvalidBody(#[source] JsonPayloadError),
}

impl Debug for RelayError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode { StatusCode::BAD_REQUEST }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// Shared by both relay endpoints: accept JSON regardless of the declared
/// content type (plain `fetch` calls often omit it), and report malformed
/// bodies in the same shape as validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|e: JsonPayloadError, _req: &HttpRequest| RelayError::InvalidBody(e).into())
}

/// `POST /subscribe`
///
/// Forwards the subscriber to the tracking endpoint (`journityConfig`) and/or
/// the newsletter endpoint (`substackUrl`), and returns one outcome per
/// destination. Always 200 once the email is present, even if both
/// destinations failed.
///
/// # Request example
///
/// ```sh
///     curl -i -H 'Content-Type: application/json' \
///         -d '{"email":"john@foo.com","substackUrl":"https://pub.example.com"}' \
///         http://127.0.0.1:3000/subscribe
/// ```
#[tracing::instrument(name = "Relaying new subscriber", skip(body, relay))]
pub async fn subscribe(
    body: web::Json<SubscribeBody>,
    relay: web::Data<Relay>,
) -> Result<HttpResponse, RelayError> {
    let request: SubscriptionRequest = body.0.try_into()?;
    let result = relay.relay(&request).await;
    Ok(HttpResponse::Ok().json(result))
}
