use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rsvp_core::{
    CelebrationHook, ConfirmationForm, FormError, FormField, HttpSubmissionClient, ResultView,
    SiteConfig, SubmissionState,
};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = config::SETTINGS_FILE)]
    config: PathBuf,
    /// Overrides the configured confirmation type (friends, family).
    #[arg(long)]
    confirmation_type: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the event details for the configured confirmation type.
    Details,
    /// Confirm attendance for one or more guests.
    Submit {
        #[arg(long)]
        phone: String,
        #[arg(long = "guest", required = true)]
        guests: Vec<String>,
    },
}

struct Confetti;

impl CelebrationHook for Confetti {
    fn celebrate(&self) {
        println!("🎉🎉🎉");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = config::load_settings(&cli.config)?;
    if let Some(kind) = cli.confirmation_type {
        settings.confirmation_type = kind;
    }
    let site = settings.resolve()?;

    match cli.command {
        Command::Details => {
            print!("{}", render_details(&site)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit { phone, guests } => submit(&site, phone, guests).await,
    }
}

fn render_details(site: &SiteConfig) -> Result<String> {
    let event = site.event;
    let date = event
        .formatted_date()
        .with_context(|| format!("invalid event date for '{}'", site.confirmation_type))?;

    let mut out = format!(
        "{}\nVai acontecer {}!\nNo dia {date}!\n📍 {}\nMapa: {}\n\nCréditos:\n",
        event.title, event.location, event.address, event.maps_frame
    );
    for credit in site.credits {
        out.push_str(&format!(
            "  {} {} ({})\n",
            credit.title, credit.social_user, credit.social_link
        ));
    }
    Ok(out)
}

/// Phone first, then one guest slot per name, in order.
fn fill_form(form: &mut ConfirmationForm, phone: String, guests: Vec<String>) -> Result<(), FormError> {
    form.set_phone(phone)?;
    for (position, guest) in guests.into_iter().enumerate() {
        if position > 0 {
            form.append_person()?;
        }
        form.update_field(FormField::Person(position), guest)?;
    }
    Ok(())
}

fn exit_code(state: SubmissionState) -> ExitCode {
    match state {
        SubmissionState::Succeeded => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

async fn submit(site: &SiteConfig, phone: String, guests: Vec<String>) -> Result<ExitCode> {
    let client = HttpSubmissionClient::from_config(site);
    let mut form = ConfirmationForm::for_site(site);
    fill_form(&mut form, phone, guests)?;

    let state = match form.submit(&client, &Confetti).await {
        Ok(state) => state,
        Err(FormError::Validation(_)) => form.state(),
        Err(err) => return Err(err.into()),
    };

    print!("{}", ResultView::render(&form, site));
    Ok(exit_code(state))
}

#[cfg(test)]
mod tests {
    use shared::{domain::ConfirmationType, protocol::GuestEntry};
    use url::Url;

    use super::*;

    fn site(kind: ConfirmationType) -> SiteConfig {
        SiteConfig::new(
            kind,
            Url::parse("http://127.0.0.1:3333").expect("url"),
            "@alezinlira",
        )
    }

    #[test]
    fn fills_one_slot_per_guest_in_order() {
        let mut form = ConfirmationForm::for_site(&site(ConfirmationType::Friends));

        fill_form(
            &mut form,
            "(11) 98888-7777".into(),
            vec!["Maria Silva".into(), "João".into(), "Bia".into()],
        )
        .expect("fill");

        assert_eq!(form.phone(), "(11) 98888-7777");
        assert_eq!(
            form.people(),
            &[
                GuestEntry::new("Maria Silva"),
                GuestEntry::new("João"),
                GuestEntry::new("Bia"),
            ]
        );
        assert!(form.can_submit());
    }

    #[test]
    fn single_guest_reuses_the_first_slot() {
        let mut form = ConfirmationForm::for_site(&site(ConfirmationType::Friends));
        fill_form(&mut form, "11912345678".into(), vec!["Ana".into()]).expect("fill");
        assert_eq!(form.people(), &[GuestEntry::new("Ana")]);
    }

    #[test]
    fn only_success_exits_zero() {
        assert_eq!(exit_code(SubmissionState::Succeeded), ExitCode::SUCCESS);
        assert_eq!(exit_code(SubmissionState::Failed), ExitCode::FAILURE);
        assert_eq!(exit_code(SubmissionState::Idle), ExitCode::FAILURE);
    }

    #[test]
    fn details_show_event_and_credits() {
        let text = render_details(&site(ConfirmationType::Family)).expect("details");

        assert!(text.starts_with("Meu Chá | Carolina Lira\n"));
        assert!(text.contains("No dia 1 de setembro de 2024 às 13h00!"));
        assert!(text.contains("Av. Manoel Pedro Pimentel, 101"));
        assert!(text.contains("@agustinhopneto"));
    }
}
