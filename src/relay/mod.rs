mod error;
pub use error::SubmissionError;

use reqwest::StatusCode;

use crate::domain::DestinationOutcome;
use crate::domain::NewsletterUrl;
use crate::domain::RelayResult;
use crate::domain::SubscriberEmail;
use crate::domain::SubscriptionRequest;
use crate::newsletter_client::newsletter_outcome;
use crate::newsletter_client::NewsletterClient;
use crate::tracking_client::TrackingClient;

/// Forwards one validated subscription to both destinations and reports an
/// outcome per destination.
///
/// Holds no per-request state; the same `Relay` is shared by every worker
/// (via `web::Data`).
pub struct Relay {
    tracking_client: TrackingClient,
    newsletter_client: NewsletterClient,
}

impl Relay {
    pub fn new(
        tracking_client: TrackingClient,
        newsletter_client: NewsletterClient,
    ) -> Self {
        Self {
            tracking_client,
            newsletter_client,
        }
    }

    /// Both destinations are submitted to concurrently; this returns once both
    /// have finished. A failure on one side is captured in its own outcome and
    /// never affects the other. Unconfigured destinations stay `pending`.
    ///
    /// Infallible by contract: every validated request gets a `RelayResult`.
    #[tracing::instrument(
        name = "Relaying subscription",
        skip_all,
        fields(
            subscriber_email = %request.email.as_ref(),
            primary_configured = request.primary.is_some(),
            secondary_configured = request.secondary.is_some(),
        )
    )]
    pub async fn relay(
        &self,
        request: &SubscriptionRequest,
    ) -> RelayResult {
        let (primary, secondary) =
            tokio::join!(self.relay_primary(request), self.relay_secondary(request));
        RelayResult { primary, secondary }
    }

    async fn relay_primary(
        &self,
        request: &SubscriptionRequest,
    ) -> DestinationOutcome {
        let Some(destination) = &request.primary else {
            return DestinationOutcome::pending();
        };
        match self
            .tracking_client
            .submit(
                destination,
                &request.email,
                request.first_name.as_deref().unwrap_or_default(),
                request.last_name.as_deref().unwrap_or_default(),
            )
            .await
        {
            Ok(message) => DestinationOutcome::success(message),
            Err(e) => {
                tracing::warn!(
                    error.cause_chain=?e,
                    error.message=%e,
                    "tracking endpoint did not accept subscription"
                );
                DestinationOutcome::error(e.message())
            }
        }
    }

    async fn relay_secondary(
        &self,
        request: &SubscriptionRequest,
    ) -> DestinationOutcome {
        match &request.secondary {
            Some(url) => self.relay_newsletter(&request.email, url).await.0,
            None => DestinationOutcome::pending(),
        }
    }

    /// Newsletter destination alone. The status code is `None` when the
    /// endpoint could not be reached at all.
    pub async fn relay_newsletter(
        &self,
        email: &SubscriberEmail,
        url: &NewsletterUrl,
    ) -> (DestinationOutcome, Option<StatusCode>) {
        let result = self.newsletter_client.submit(url, email).await;
        let outcome = newsletter_outcome(&result);
        match result {
            Ok(status) => (outcome, Some(status)),
            Err(e) => {
                tracing::warn!(
                    error.cause_chain=?e,
                    error.message=%e,
                    "newsletter endpoint unreachable"
                );
                (outcome, None)
            }
        }
    }
}
