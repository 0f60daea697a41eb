use shared::protocol::GuestEntry;

use crate::error::GuestListError;

/// Ordered guest entries. Never empty; position 0 cannot be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestList {
    entries: Vec<GuestEntry>,
}

impl Default for GuestList {
    fn default() -> Self {
        Self {
            entries: vec![GuestEntry::default()],
        }
    }
}

impl GuestList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[GuestEntry] {
        &self.entries
    }

    pub fn append(&mut self) {
        self.entries.push(GuestEntry::default());
    }

    pub fn remove_at(&mut self, position: usize) -> Result<GuestEntry, GuestListError> {
        self.check_position(position)?;
        if position == 0 {
            return Err(GuestListError::FirstEntryProtected);
        }
        Ok(self.entries.remove(position))
    }

    pub fn update(&mut self, position: usize, text: impl Into<String>) -> Result<(), GuestListError> {
        self.check_position(position)?;
        self.entries[position].value = text.into();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn check_position(&self, position: usize) -> Result<(), GuestListError> {
        if position >= self.entries.len() {
            return Err(GuestListError::OutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}
