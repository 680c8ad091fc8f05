use std::fmt::Debug;

use super::NewsletterUrl;
use super::PrimaryDestination;
use super::SubscriberEmail;
use crate::utils::error_chain_fmt;

/// A validated subscription, immutable once built. A destination left as
/// `None` is not configured and will not be attempted.
#[derive(Debug)]
pub struct SubscriptionRequest {
    pub email: SubscriberEmail,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub primary: Option<PrimaryDestination>,
    pub secondary: Option<NewsletterUrl>,
}

/// Required fields missing from the inbound payload. Always surfaces as a 400
/// and no destination is contacted.
#[derive(thiserror::Error)]
pub enum ValidationError {
    // displayed to the caller as-is
    #[error("Email is required")]
    MissingEmail,
    #[error("Newsletter URL is required")]
    MissingNewsletterUrl,
}

impl Debug for ValidationError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
