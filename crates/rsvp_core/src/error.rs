use thiserror::Error;

use crate::{form::SubmissionState, validation::FieldErrors};

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("confirmation request failed in transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("confirmation endpoint responded with status {status}")]
    Rejected { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuestListError {
    #[error("guest position {position} is out of range for {len} entries")]
    OutOfRange { position: usize, len: usize },
    #[error("the first guest entry cannot be removed")]
    FirstEntryProtected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("confirmation has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("confirmation form has not been edited")]
    Pristine,
    #[error("a confirmation is already being submitted")]
    SubmissionInFlight,
    #[error("no confirmation is being submitted")]
    NotSubmitting,
    #[error("confirmation form is closed in state {0:?}")]
    Closed(SubmissionState),
    #[error(transparent)]
    GuestList(#[from] GuestListError),
}
