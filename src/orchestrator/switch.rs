//! Kind-level switching: terminal, file browser toggle, fresh editor.

use super::PaneOrchestrator;
use crate::content::ContentKind;
use crate::error::PaneError;
use crate::host::Transaction;

impl PaneOrchestrator {
    /// Bring content of `kind` to its home region.
    ///
    /// - `Terminal`: show the terminal on Left, hiding whatever Left shows.
    ///   Calling it again changes nothing.
    /// - `FileBrowser`: toggle the browser's visibility on Right.
    /// - `Editor`: open a new scratch editor, same as `open_editor(None)`.
    pub fn switch_to(&self, kind: ContentKind) -> Result<(), PaneError> {
        match kind {
            ContentKind::Terminal => self.show_terminal(),
            ContentKind::FileBrowser => self.toggle_file_browser(),
            ContentKind::Editor => self.open_editor(None).map(|_| ()),
        }
    }

    fn show_terminal(&self) -> Result<(), PaneError> {
        let mut left = self.left.lock();
        let mut tx = Transaction::new();
        let terminal = self.singleton(ContentKind::Terminal, &mut tx)?;
        left.bind_and_show(&terminal, &mut tx);
        self.commit(tx);
        Ok(())
    }

    fn toggle_file_browser(&self) -> Result<(), PaneError> {
        let mut right = self.right.lock();
        let mut tx = Transaction::new();
        let browser = self.singleton(ContentKind::FileBrowser, &mut tx)?;
        if right.shows(&browser) {
            right.hide(&browser, &mut tx)?;
            crate::debug_log!("PANE", "File browser hidden");
        } else {
            right.bind_and_show(&browser, &mut tx);
            crate::debug_log!("PANE", "File browser shown");
        }
        self.commit(tx);
        Ok(())
    }
}
