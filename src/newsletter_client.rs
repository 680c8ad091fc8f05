use std::time::Duration;

use reqwest::header::ORIGIN;
use reqwest::header::REFERER;
use reqwest::Client;
use reqwest::StatusCode;

use crate::domain::DestinationOutcome;
use crate::domain::NewsletterUrl;
use crate::domain::SubscriberEmail;
use crate::relay::SubmissionError;

/// The newsletter endpoint rejects requests that don't look like they come
/// from a browser
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const SENT_MESSAGE: &str = "Subscription request sent to Substack";

/// Client for the third-party newsletter endpoint (Substack). Its submission
/// contract is not ours and is not documented; we post the form the way a
/// browser would and judge the answer with `looks_accepted`.
pub struct NewsletterClient {
    http_client: Client,
}

impl NewsletterClient {
    /// Redirects are followed (reqwest's default policy, up to 10 hops).
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self { http_client })
    }

    /// Single form-encoded `POST` of `email=<value>` to `<base>/subscribe`; no
    /// retries, no CSRF negotiation. Returns the final status code, whatever it
    /// is; only a transport failure is an error here.
    #[tracing::instrument(
        name = "Submitting subscriber to newsletter endpoint",
        skip_all,
        fields(endpoint = %url.subscribe_url())
    )]
    pub async fn submit(
        &self,
        url: &NewsletterUrl,
        email: &SubscriberEmail,
    ) -> Result<StatusCode, SubmissionError> {
        let response = self
            .http_client
            .post(url.subscribe_url())
            .header(REFERER, url.base_url())
            .header(ORIGIN, url.base_url())
            .form(&[("email", email.as_ref())])
            .send()
            .await
            .map_err(SubmissionError::Transport)?;
        Ok(response.status())
    }
}

/// Success heuristic for the newsletter endpoint: 200 (subscribed page) and
/// 302 (redirect to a welcome page) are both taken as success. Nothing confirms
/// the subscription actually happened; the endpoint may also want a CSRF token
/// that we never send.
pub fn looks_accepted(status: StatusCode) -> bool {
    matches!(status, StatusCode::OK | StatusCode::FOUND)
}

/// Convert the result of `NewsletterClient::submit` into the outcome reported
/// to the form
pub fn newsletter_outcome(result: &Result<StatusCode, SubmissionError>) -> DestinationOutcome {
    match result {
        Ok(status) if looks_accepted(*status) => DestinationOutcome::success(SENT_MESSAGE),
        Ok(status) => {
            DestinationOutcome::error(format!("Substack returned status {}", status.as_u16()))
        }
        Err(e) => DestinationOutcome::error(format!("Failed to submit to Substack: {}", e.message())),
    }
}
