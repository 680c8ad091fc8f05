use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;
use reqwest::StatusCode;
use serde::Serialize;

use crate::domain::CorrelationToken;
use crate::domain::PrimaryDestination;
use crate::domain::SubscriberEmail;
use crate::relay::SubmissionError;

/// What the tracking endpoint literally answers on success; replaced with
/// something a subscriber can read
const RAW_SUCCESS: &str = "success";
const STORED_MESSAGE: &str = "Successfully stored in Journity";

/// Body of a form submission, as the tracking endpoint's form api expects it
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    aid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cta_hash_id: Option<&'a str>,
    did: CorrelationToken,
    abhash: CorrelationToken,
    data: SubscriberData<'a>,
}

#[derive(Serialize)]
struct SubscriberData<'a> {
    email: &'a str,
    first: &'a str,
    last: &'a str,
}

/// Client for the first-party tracking endpoint (Journity). The endpoint url
/// comes with each request, so one client serves every form.
///
/// Establishing a HTTP connection is expensive; the `Client` (and its pool) is
/// built once at startup and shared via `Relay`.
pub struct TrackingClient {
    http_client: Client,
}

impl TrackingClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }

    /// Single `POST` with a JSON payload; no retries. A fresh pair of
    /// correlation tokens is generated for every call.
    ///
    /// Returns the message to show the subscriber.
    #[tracing::instrument(
        name = "Submitting subscriber to tracking endpoint",
        skip_all,
        fields(endpoint = %destination.endpoint_url)
    )]
    pub async fn submit(
        &self,
        destination: &PrimaryDestination,
        email: &SubscriberEmail,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, SubmissionError> {
        let payload = SubmissionPayload {
            aid: destination.account_id.as_deref(),
            cta_hash_id: destination.form_id.as_deref(),
            did: CorrelationToken::generate(),
            abhash: CorrelationToken::generate(),
            data: SubscriberData {
                email: email.as_ref(),
                first: first_name,
                last: last_name,
            },
        };

        let response = self
            .http_client
            .post(&destination.endpoint_url)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await.map_err(SubmissionError::Transport)?;
            return Ok(match body.as_str() {
                RAW_SUCCESS => STORED_MESSAGE.to_string(),
                _ => body,
            });
        }

        // an unreadable error body is no worse than a non-JSON one
        let body = response.bytes().await.unwrap_or_default();
        Err(SubmissionError::Rejected(rejection_message(status, &body)))
    }
}

/// Error message of a rejected submission, in two steps: the `message` field
/// of a JSON body, or, when the body is not JSON, the status line's reason
/// phrase. Either one missing or empty gives `HTTP <status>`.
fn rejection_message(
    status: StatusCode,
    body: &[u8],
) -> String {
    let message = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        Err(_) => status.canonical_reason().map(str::to_string),
    };
    message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
