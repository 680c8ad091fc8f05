const SUBSCRIBE_SUFFIX: &str = "/subscribe";

/// Newsletter publication URL, normalized so that `subscribe_url` always ends
/// with `/subscribe`. The form may send either the publication root or the
/// subscribe page itself.
#[derive(Debug, Clone)]
pub struct NewsletterUrl {
    /// Publication root; sent as `Referer` and `Origin`
    base: String,
    subscribe: String,
}

impl NewsletterUrl {
    /// Returns `None` for an empty url (unconfigured destination).
    pub fn parse(url: String) -> Option<Self> {
        if url.is_empty() {
            return None;
        }
        let parsed = match url.strip_suffix(SUBSCRIBE_SUFFIX) {
            Some(base) => Self {
                base: base.to_string(),
                subscribe: url.clone(),
            },
            None if url.ends_with('/') => Self {
                subscribe: format!("{url}subscribe"),
                base: url,
            },
            None => Self {
                subscribe: format!("{url}{SUBSCRIBE_SUFFIX}"),
                base: url,
            },
        };
        Some(parsed)
    }

    pub fn base_url(&self) -> &str { &self.base }

    pub fn subscribe_url(&self) -> &str { &self.subscribe }
}
