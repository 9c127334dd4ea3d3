//! Editor lifecycle on the Left pane.
//!
//! Permit policy depends on [`AcquireMode`]:
//!
//! - `NonBlocking`: an editor bound to Left is replaced. It is removed and
//!   its permit goes straight to the new editor. With nothing to replace,
//!   a free permit is taken or the call fails with `ResourceExhausted`.
//! - `Blocking`: nothing is replaced. A free permit is taken, otherwise the
//!   caller waits for one with the Left lock released. On the main
//!   sequence that wait could never end, so it fails with
//!   `ResourceExhausted` instead.

use super::PaneOrchestrator;
use crate::config::AcquireMode;
use crate::content::{ContentHandle, ContentKind, ContentTag, Registered};
use crate::error::PaneError;
use crate::host::Transaction;
use crate::pane::{PaneGuard, Region};
use crate::pool::Permit;
use std::path::Path;

impl PaneOrchestrator {
    /// Open an editor on Left, against `file` or as a scratch buffer.
    ///
    /// A file that already has a live editor re-shows that editor without
    /// touching the pool. Every failure after a permit was taken gives the
    /// permit back before the error is returned.
    pub fn open_editor(&self, file: Option<&Path>) -> Result<ContentHandle, PaneError> {
        let mut left = self.left.lock();
        let mut tx = Transaction::new();

        if let Some(existing) = self.existing_editor(file) {
            left.bind_and_show(&existing, &mut tx);
            self.commit(tx);
            crate::debug_log!("PANE", "Re-showing open editor {}", existing);
            return Ok(existing);
        }

        let mut evicted = None;
        let permit = match self.acquire_mode {
            AcquireMode::NonBlocking => {
                evicted = self.evict_left_editor(&mut left, &mut tx);
                evicted
                    .as_mut()
                    .and_then(|entry| entry.permit.take())
                    .or_else(|| self.pool.try_acquire())
            }
            AcquireMode::Blocking => match self.pool.try_acquire() {
                Some(permit) => Some(permit),
                None if self.is_main_sequence() => {
                    log::warn!("Editor pool exhausted on the main sequence; refusing to block");
                    None
                }
                None => {
                    drop(left);
                    crate::debug_log!("PANE", "Waiting for an editor permit");
                    let permit = self.pool.acquire();
                    left = self.left.lock();

                    // Someone may have opened the same file while we waited
                    if let Some(existing) = self.existing_editor(file) {
                        drop(permit);
                        left.bind_and_show(&existing, &mut tx);
                        self.commit(tx);
                        return Ok(existing);
                    }
                    Some(permit)
                }
            },
        };

        let result = match permit {
            Some(permit) => self.install_editor(&mut left, file, permit, &mut tx),
            None => Err(PaneError::ResourceExhausted {
                capacity: self.pool.capacity(),
            }),
        };
        if result.is_err() && evicted.is_some() {
            self.restore_terminal(&mut left, &mut tx);
        }
        self.commit(tx);
        drop(left);

        if let Some(entry) = evicted {
            crate::debug_info!("PANE", "Replaced editor {}", entry.handle);
            entry.handle.view().dispose();
        }
        result
    }

    /// Re-show a registered editor on Left.
    ///
    /// Returns `Ok(false)` when the editor has already been removed.
    pub fn focus_editor(&self, handle: &ContentHandle) -> Result<bool, PaneError> {
        if handle.kind() != ContentKind::Editor {
            return Err(PaneError::UnsupportedKind(handle.kind()));
        }
        let mut left = self.left.lock();
        if !self.registry.lock().contains(handle) {
            return Ok(false);
        }
        let mut tx = Transaction::new();
        left.bind_and_show(handle, &mut tx);
        self.commit(tx);
        Ok(true)
    }

    /// Wait until `handle`'s home region is free, then show it there.
    ///
    /// Never hides visible content; it only fills a pane that is empty or
    /// hidden. Intended for background contexts. On the main sequence it
    /// returns `WouldDeadlock` rather than waiting.
    pub fn show_when_free(&self, handle: &ContentHandle) -> Result<bool, PaneError> {
        let region = handle.kind().home_region();
        if self.is_main_sequence() {
            return Err(PaneError::WouldDeadlock { region });
        }

        let mut pane = self.pane(region).lock();
        pane.wait_until_free(handle);
        if !self.registry.lock().contains(handle) {
            return Ok(false);
        }
        let mut tx = Transaction::new();
        pane.bind_and_show(handle, &mut tx);
        self.commit(tx);
        Ok(true)
    }

    fn existing_editor(&self, file: Option<&Path>) -> Option<ContentHandle> {
        let tag = ContentTag::for_file(&self.factory.resolve_file(file?));
        self.registry.lock().lookup(&tag)
    }

    /// Construct, register and show a new editor holding `permit`
    fn install_editor(
        &self,
        left: &mut PaneGuard<'_>,
        file: Option<&Path>,
        permit: Permit,
        tx: &mut Transaction,
    ) -> Result<ContentHandle, PaneError> {
        // On failure the permit drops here, before the error reaches the caller
        let handle = self.factory.create(ContentKind::Editor, file)?;

        if let Some(displaced) = self.registry.lock().put(handle.clone(), Some(permit)) {
            // Editors are only registered under the Left lock, which we hold
            log::warn!("Editor {} displaced {}", handle, displaced.handle);
        }
        tx.add(&handle, Region::Left);
        left.bind_and_show(&handle, tx);
        crate::debug_info!(
            "PANE",
            "Opened editor {} ({} of {} permits in use)",
            handle,
            self.pool.outstanding(),
            self.pool.capacity()
        );
        Ok(handle)
    }

    /// Unregister and unbind the editor bound to Left, if any.
    ///
    /// The returned entry still owns the editor's permit. Disposing the
    /// view is left to the caller, after the batch is committed.
    fn evict_left_editor(
        &self,
        left: &mut PaneGuard<'_>,
        tx: &mut Transaction,
    ) -> Option<Registered> {
        let bound = left.bound()?.clone();
        if bound.kind() != ContentKind::Editor {
            return None;
        }

        let entry = self.registry.lock().remove_handle(&bound)?;
        if left.shows(&bound)
            && let Err(e) = left.hide(&bound, tx)
        {
            log::debug!("{e}");
        }
        if let Err(e) = left.unbind(&bound) {
            log::debug!("{e}");
        }
        tx.remove(&bound);
        Some(entry)
    }

    /// Put the terminal back on an emptied Left pane
    fn restore_terminal(&self, left: &mut PaneGuard<'_>, tx: &mut Transaction) {
        match self.singleton(ContentKind::Terminal, tx) {
            Ok(terminal) => left.bind_and_show(&terminal, tx),
            Err(e) => log::error!("Could not restore the terminal: {e}"),
        }
    }
}
