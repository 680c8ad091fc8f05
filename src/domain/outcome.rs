use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// Destination not configured, so never attempted
    Pending,
    Success,
    Error,
}

/// Result of forwarding a subscription to a single destination. Created fresh
/// for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationOutcome {
    pub status: OutcomeStatus,
    pub message: String,
}

impl DestinationOutcome {
    pub fn pending() -> Self {
        Self {
            status: OutcomeStatus::Pending,
            message: String::new(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Error,
            message: message.into(),
        }
    }
}

impl Default for DestinationOutcome {
    fn default() -> Self { Self::pending() }
}

/// One outcome per destination. The field names on the wire are the names of
/// the two original services, and the form depends on them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResult {
    #[serde(rename = "journity")]
    pub primary: DestinationOutcome,
    #[serde(rename = "substack")]
    pub secondary: DestinationOutcome,
}
