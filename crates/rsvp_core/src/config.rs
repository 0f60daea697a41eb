use shared::{
    content::{event_details, EventDetails, CREDITS, GIFTS_LIST_URL},
    domain::{ConfirmationType, Credit},
};
use url::Url;

/// Immutable site configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub confirmation_type: ConfirmationType,
    pub event: &'static EventDetails,
    pub api_base: Url,
    pub gifts_url: &'static str,
    pub credits: &'static [Credit],
    /// Who to reach out-of-band when a submission fails.
    pub fallback_contact: String,
}

impl SiteConfig {
    pub fn new(
        confirmation_type: ConfirmationType,
        api_base: Url,
        fallback_contact: impl Into<String>,
    ) -> Self {
        Self {
            confirmation_type,
            event: event_details(confirmation_type),
            api_base,
            gifts_url: GIFTS_LIST_URL,
            credits: &CREDITS,
            fallback_contact: fallback_contact.into(),
        }
    }
}
