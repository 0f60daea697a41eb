use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownConfirmationType;

/// Which event variant a deployment of the invitation represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationType {
    Friends,
    Family,
}

impl ConfirmationType {
    pub const ALL: [ConfirmationType; 2] = [ConfirmationType::Friends, ConfirmationType::Family];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfirmationType::Friends => "friends",
            ConfirmationType::Family => "family",
        }
    }
}

impl fmt::Display for ConfirmationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfirmationType {
    type Err = UnknownConfirmationType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownConfirmationType::new(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Credit {
    pub title: &'static str,
    pub social_user: &'static str,
    pub social_link: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types_case_insensitively() {
        assert_eq!(
            "friends".parse::<ConfirmationType>().expect("friends"),
            ConfirmationType::Friends
        );
        assert_eq!(
            " FAMILY ".parse::<ConfirmationType>().expect("family"),
            ConfirmationType::Family
        );
    }

    #[test]
    fn rejects_unknown_type() {
        let err = "coworkers".parse::<ConfirmationType>().unwrap_err();
        assert_eq!(err.value(), "coworkers");
    }

    #[test]
    fn serializes_as_snake_case_tag() {
        assert_eq!(
            serde_json::to_string(&ConfirmationType::Family).expect("json"),
            "\"family\""
        );
    }
}
