use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown confirmation type '{value}' (expected one of: friends, family)")]
pub struct UnknownConfirmationType {
    value: String,
}

impl UnknownConfirmationType {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
