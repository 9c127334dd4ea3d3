use super::PaneOrchestrator;
use crate::content::ContentHandle;
use crate::host::Transaction;

impl PaneOrchestrator {
    /// Permanently remove `handle`.
    ///
    /// Unregisters it, unbinds it from its home pane, releases its editor
    /// permit and disposes the view. Returns `false` (and does nothing) when
    /// the handle is no longer registered, so repeated or racing removals
    /// are harmless.
    pub fn remove(&self, handle: &ContentHandle) -> bool {
        let mut pane = self.pane(handle.kind().home_region()).lock();
        let Some(entry) = self.registry.lock().remove_handle(handle) else {
            crate::debug_log!("PANE", "Ignoring remove of unregistered {}", handle);
            return false;
        };

        // A parked handle is registered but bound nowhere
        if let Err(e) = pane.unbind(handle) {
            log::debug!("{e}; removing parked content");
        }
        let mut tx = Transaction::new();
        tx.remove(handle);
        self.commit(tx);
        drop(pane);

        handle.view().dispose();
        // Releases the editor permit, if any
        drop(entry);
        crate::debug_info!(
            "PANE",
            "Removed {} ({} of {} permits in use)",
            handle,
            self.pool.outstanding(),
            self.pool.capacity()
        );
        true
    }

    /// Detach every input listener. Content stays registered.
    pub fn cleanup(&self) {
        let mut listeners = self.listeners.lock();
        let count = listeners.len();
        listeners.clear();
        crate::debug_info!("PANE", "Cleanup detached {} input listeners", count);
    }
}
