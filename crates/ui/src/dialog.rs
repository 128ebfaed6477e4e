use serde::{Deserialize, Serialize};

/// Unique identifier for a dialog.
pub type DialogId = String;

/// A dialog's open/close bookkeeping plus whatever payload the trigger
/// point attached when opening it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogInstance {
    pub dialog_id: DialogId,
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// In-memory registry of dialog instances.
///
/// At most one open instance exists per id: `open` is idempotent and
/// `close` removes the instance entirely, so reopening starts fresh.
#[derive(Debug, Default)]
pub struct DialogRegistry {
    state: Vec<DialogInstance>,
}

impl DialogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a dialog, or returns the existing instance unchanged if one
    /// with this id is already registered. `data` is only stored on first
    /// open; a repeated open does not overwrite it.
    pub fn open(&mut self, dialog_id: &str, data: Option<serde_json::Value>) -> &DialogInstance {
        if let Some(idx) = self.state.iter().position(|d| d.dialog_id == dialog_id) {
            return &self.state[idx];
        }
        self.state.push(DialogInstance {
            dialog_id: dialog_id.to_string(),
            is_open: true,
            data,
        });
        self.state.last().expect("just pushed")
    }

    /// Returns the instance only while it is open.
    pub fn get_open(&self, dialog_id: &str) -> Option<&DialogInstance> {
        self.state
            .iter()
            .find(|d| d.dialog_id == dialog_id && d.is_open)
    }

    /// Removes the first open instance with this id; no-op if none exists.
    pub fn close(&mut self, dialog_id: &str) {
        if let Some(idx) = self
            .state
            .iter()
            .position(|d| d.dialog_id == dialog_id && d.is_open)
        {
            self.state.remove(idx);
        }
    }

    pub fn open_count(&self) -> usize {
        self.state.iter().filter(|d| d.is_open).count()
    }
}
