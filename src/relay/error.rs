use std::fmt::Debug;

use crate::utils::describe_error;
use crate::utils::error_chain_fmt;

/// A destination did not accept the subscription. Always captured as that
/// destination's `error` outcome; it never affects the other destination.
#[derive(thiserror::Error)]
pub enum SubmissionError {
    /// The destination answered, but not with a success
    #[error("{0}")]
    Rejected(String),
    /// The destination could not be reached (connection refused, dns, timeout)
    #[error("Failed to reach destination")]
    Transport(#[source] reqwest::Error),
}

impl SubmissionError {
    /// Message shown to the subscriber
    pub fn message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Transport(e) => describe_error(e),
        }
    }
}

impl Debug for SubmissionError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
