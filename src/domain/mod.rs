mod correlation_token;
mod newsletter_url;
mod outcome;
mod primary_destination;
mod subscriber_email;
mod subscription_request;
// allow external `use` statements to skip `subscriber_email` etc
pub use correlation_token::CorrelationToken;
pub use newsletter_url::NewsletterUrl;
pub use outcome::DestinationOutcome;
pub use outcome::OutcomeStatus;
pub use outcome::RelayResult;
pub use primary_destination::PrimaryDestination;
pub use subscriber_email::SubscriberEmail;
pub use subscription_request::SubscriptionRequest;
pub use subscription_request::ValidationError;
