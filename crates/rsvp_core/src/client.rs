use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{ConfirmationRequest, InviteHttpRequest};
use tracing::{debug, warn};
use url::Url;

use crate::{config::SiteConfig, error::SubmissionError};

pub const INVITES_PATH: &str = "/invites";

#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), SubmissionError>;
}

/// Posts confirmations to `<api_base>/invites`. Single attempt, transport
/// default timeouts.
pub struct HttpSubmissionClient {
    http: Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    pub fn new(api_base: &Url) -> Self {
        Self {
            http: Client::new(),
            endpoint: format!("{}{INVITES_PATH}", api_base.as_str().trim_end_matches('/')),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.api_base)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), SubmissionError> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(&InviteHttpRequest::from(request))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "confirmation endpoint rejected request"
            );
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), "confirmation acknowledged");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
