//! RSVP core: field validation, guest-list editing, the confirmation form
//! state machine, the HTTP submission client and the result presenter.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod guest_list;
pub mod validation;
pub mod view;

pub use client::{HttpSubmissionClient, SubmissionClient};
pub use config::SiteConfig;
pub use error::{FormError, GuestListError, SubmissionError};
pub use form::{CelebrationHook, ConfirmationForm, NoCelebration, SubmissionState};
pub use guest_list::GuestList;
pub use validation::{is_valid_name, is_valid_phone, FieldErrors, FormField};
pub use view::ResultView;
