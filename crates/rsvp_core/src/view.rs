use std::fmt;

use crate::{
    config::SiteConfig,
    form::{ConfirmationForm, SubmissionState},
    validation::FormField,
};

/// The single view shown for the current form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Form {
        errors: Vec<(FormField, &'static str)>,
        can_submit: bool,
        submitting: bool,
    },
    Success {
        gifts_url: &'static str,
    },
    Error {
        contact: String,
    },
}

impl ResultView {
    pub fn render(form: &ConfirmationForm, config: &SiteConfig) -> Self {
        match form.state() {
            SubmissionState::Idle | SubmissionState::Submitting => ResultView::Form {
                errors: form.errors().iter().collect(),
                can_submit: form.can_submit(),
                submitting: form.state() == SubmissionState::Submitting,
            },
            SubmissionState::Succeeded => ResultView::Success {
                gifts_url: config.gifts_url,
            },
            SubmissionState::Failed => ResultView::Error {
                contact: config.fallback_contact.clone(),
            },
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ResultView::Form {
                submitting: true, ..
            } => "Enviando sua confirmação...",
            ResultView::Form { .. } => "Vamos confirmar sua presença?",
            ResultView::Success { .. } => "Presença confirmada! Até lá!",
            ResultView::Error { .. } => "Ops! Não conseguimos registrar sua confirmação.",
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        match self {
            ResultView::Form { errors, .. } => {
                for (field, message) in errors {
                    writeln!(f, "  {field}: {message}")?;
                }
            }
            ResultView::Success { gifts_url } => {
                writeln!(f, "Se quiser me mimar, a lista de presentes está aqui: {gifts_url}")?;
            }
            ResultView::Error { contact } => {
                writeln!(
                    f,
                    "Por favor, fale com {contact} para confirmar sua presença."
                )?;
            }
        }
        Ok(())
    }
}
