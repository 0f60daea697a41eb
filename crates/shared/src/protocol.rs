use serde::{Deserialize, Serialize};

use crate::domain::ConfirmationType;

/// One attendee slot in a confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestEntry {
    pub value: String,
}

impl GuestEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A validated confirmation, assembled fresh on every submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub confirmation_type: ConfirmationType,
    pub phone: String,
    pub people: Vec<GuestEntry>,
}

/// JSON body accepted by `POST /invites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteHttpRequest {
    #[serde(rename = "type")]
    pub confirmation_type: ConfirmationType,
    pub phone: String,
    pub people: Vec<String>,
}

impl From<&ConfirmationRequest> for InviteHttpRequest {
    fn from(request: &ConfirmationRequest) -> Self {
        Self {
            confirmation_type: request.confirmation_type,
            phone: request.phone.clone(),
            people: request
                .people
                .iter()
                .map(|entry| entry.value.clone())
                .collect(),
        }
    }
}
