use super::ValidationError;

/// Email address submitted through the form.
///
/// Only presence is checked here; both destinations run their own address
/// validation, so the value is forwarded exactly as received.
#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(email: Option<String>) -> Result<Self, ValidationError> {
        match email {
            Some(email) if !email.is_empty() => Ok(Self(email)),
            _ => Err(ValidationError::MissingEmail),
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
