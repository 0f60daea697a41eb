use std::{fs, io, path::Path};

use anyhow::Context;
use rsvp_core::SiteConfig;
use serde::Deserialize;
use shared::domain::ConfirmationType;
use url::Url;

pub const SETTINGS_FILE: &str = "rsvp.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub confirmation_type: String,
    pub rsvp_api_url: String,
    pub fallback_contact: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirmation_type: "friends".into(),
            rsvp_api_url: "http://127.0.0.1:3333".into(),
            fallback_contact: "@alezinlira".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    confirmation_type: Option<String>,
    rsvp_api_url: Option<String>,
    fallback_contact: Option<String>,
}

impl Settings {
    /// Resolves the settings into the immutable configuration handed to the core.
    pub fn resolve(&self) -> anyhow::Result<SiteConfig> {
        let confirmation_type = self
            .confirmation_type
            .parse::<ConfirmationType>()
            .context("invalid confirmation type in settings")?;
        let api_base = Url::parse(self.rsvp_api_url.trim())
            .with_context(|| format!("invalid rsvp api url '{}'", self.rsvp_api_url))?;

        Ok(SiteConfig::new(
            confirmation_type,
            api_base,
            self.fallback_contact.trim(),
        ))
    }
}

/// A missing settings file means defaults; an unreadable or malformed one is
/// an error.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    load_settings_from(raw.as_deref(), |key| std::env::var(key).ok())
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Defaults, then the settings file, then `KEY` and `APP__KEY` environment
/// variables, later sources winning.
pub fn load_settings_from(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        let file_cfg = toml::from_str::<FileSettings>(raw)?;
        if let Some(v) = file_cfg.confirmation_type {
            settings.confirmation_type = v;
        }
        if let Some(v) = file_cfg.rsvp_api_url {
            settings.rsvp_api_url = v;
        }
        if let Some(v) = file_cfg.fallback_contact {
            settings.fallback_contact = v;
        }
    }

    if let Some(v) = env("CONFIRMATION_TYPE") {
        settings.confirmation_type = v;
    }
    if let Some(v) = env("APP__CONFIRMATION_TYPE") {
        settings.confirmation_type = v;
    }

    if let Some(v) = env("RSVP_API_URL") {
        settings.rsvp_api_url = v;
    }
    if let Some(v) = env("APP__RSVP_API_URL") {
        settings.rsvp_api_url = v;
    }

    if let Some(v) = env("FALLBACK_CONTACT") {
        settings.fallback_contact = v;
    }
    if let Some(v) = env("APP__FALLBACK_CONTACT") {
        settings.fallback_contact = v;
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
