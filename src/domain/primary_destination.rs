/// Where and how to reach the first-party tracking endpoint. Sent by the form
/// as `journityConfig`.
#[derive(Debug, Clone)]
pub struct PrimaryDestination {
    pub endpoint_url: String,
    /// `aid`; omitted from the payload when absent
    pub account_id: Option<String>,
    /// `ctaHashId`; omitted from the payload when absent
    pub form_id: Option<String>,
}

impl PrimaryDestination {
    /// Returns `None` when `endpoint_url` is missing or empty; such a
    /// destination is treated as unconfigured and never attempted.
    pub fn parse(
        endpoint_url: Option<String>,
        account_id: Option<String>,
        form_id: Option<String>,
    ) -> Option<Self> {
        let endpoint_url = endpoint_url.filter(|u| !u.is_empty())?;
        Some(Self {
            endpoint_url,
            account_id,
            form_id,
        })
    }
}
