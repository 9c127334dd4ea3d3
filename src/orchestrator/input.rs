//! Shell input controls and their listeners.

use super::PaneOrchestrator;
use crate::content::ContentKind;
use crate::error::PaneError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A shell control the orchestrator listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Brings the terminal to the Left pane
    TerminalButton,
    /// Toggles the file browser on the Right pane
    FileBrowserButton,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::TerminalButton => f.write_str("terminal button"),
            Control::FileBrowserButton => f.write_str("file browser button"),
        }
    }
}

pub(super) fn default_listeners() -> HashMap<Control, ContentKind> {
    HashMap::from([
        (Control::TerminalButton, ContentKind::Terminal),
        (Control::FileBrowserButton, ContentKind::FileBrowser),
    ])
}

impl PaneOrchestrator {
    /// Run the listener installed for `control`.
    ///
    /// Returns `Ok(false)` when no listener is attached, which is the case
    /// for every control after `cleanup`.
    pub fn dispatch_input(&self, control: Control) -> Result<bool, PaneError> {
        let Some(kind) = self.listeners.lock().get(&control).copied() else {
            crate::debug_trace!("INPUT", "No listener for {}", control);
            return Ok(false);
        };
        crate::debug_log!("INPUT", "{} pressed", control);
        self.switch_to(kind)?;
        Ok(true)
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.lock().is_empty()
    }
}
