//! Per-region binding state guarded by a mutex + condition variable pair.
//!
//! State machine: `Empty → Bound(h, hidden) ⇄ Bound(h, visible) → Empty`.
//! All transitions go through a [`PaneGuard`], so a caller that needs to
//! consult the registry or commit to the view host does so while still
//! holding the pane lock.

use super::Region;
use crate::content::{ContentHandle, ContentId};
use crate::error::PaneError;
use crate::host::Transaction;
use parking_lot::{Condvar, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Slot {
    bound: Option<ContentHandle>,
    visible: bool,
    /// Visible → hidden transitions so far
    hides: u64,
}

/// Point-in-time view of a pane, for queries and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSnapshot {
    pub region: Region,
    pub bound: Option<ContentId>,
    pub visible: bool,
    pub hides: u64,
}

/// Binding state for one region
#[derive(Debug)]
pub struct PaneState {
    region: Region,
    slot: Mutex<Slot>,
    freed: Condvar,
}

impl PaneState {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            slot: Mutex::new(Slot::default()),
            freed: Condvar::new(),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Take the pane lock
    pub fn lock(&self) -> PaneGuard<'_> {
        PaneGuard {
            region: self.region,
            slot: self.slot.lock(),
            freed: &self.freed,
        }
    }

    pub fn current(&self) -> Option<ContentHandle> {
        self.slot.lock().bound.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.slot.lock().visible
    }

    pub fn snapshot(&self) -> PaneSnapshot {
        self.lock().snapshot()
    }
}

/// Exclusive access to one pane's binding
pub struct PaneGuard<'a> {
    region: Region,
    slot: MutexGuard<'a, Slot>,
    freed: &'a Condvar,
}

impl PaneGuard<'_> {
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn bound(&self) -> Option<&ContentHandle> {
        self.slot.bound.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.slot.visible
    }

    /// Whether `handle` is bound and visible here
    pub fn shows(&self, handle: &ContentHandle) -> bool {
        self.slot.visible && self.slot.bound.as_ref() == Some(handle)
    }

    /// Whether `claimant` could be shown without hiding somebody else
    pub fn is_free_for(&self, claimant: &ContentHandle) -> bool {
        !self.slot.visible || self.slot.bound.as_ref() == Some(claimant)
    }

    /// Bind `handle` and make it visible.
    ///
    /// A different visible handle is hidden first, so the batch always
    /// carries `Hide(old)` before `Show(new)`. Re-binding the current
    /// handle only ensures it is visible.
    pub fn bind_and_show(&mut self, handle: &ContentHandle, tx: &mut Transaction) {
        if self.slot.bound.as_ref() == Some(handle) {
            if !self.slot.visible {
                tx.show(handle);
                self.slot.visible = true;
            }
            return;
        }

        if let Some(previous) = self.slot.bound.take()
            && self.slot.visible
        {
            tx.hide(&previous);
            self.mark_hidden();
        }

        tx.show(handle);
        self.slot.bound = Some(handle.clone());
        self.slot.visible = true;
        log::debug!("{} pane now shows {}", self.region, handle);
    }

    /// Hide `handle` while keeping it bound
    pub fn hide(&mut self, handle: &ContentHandle, tx: &mut Transaction) -> Result<(), PaneError> {
        if self.slot.bound.as_ref() != Some(handle) {
            return Err(self.inconsistent(handle));
        }
        if self.slot.visible {
            tx.hide(handle);
            self.mark_hidden();
        }
        self.freed.notify_all();
        Ok(())
    }

    /// Drop the binding to `handle`, leaving the pane empty.
    ///
    /// Waiters are signalled even when nothing matched.
    pub fn unbind(&mut self, handle: &ContentHandle) -> Result<(), PaneError> {
        let result = if self.slot.bound.as_ref() == Some(handle) {
            self.slot.bound = None;
            if self.slot.visible {
                self.mark_hidden();
            }
            Ok(())
        } else {
            Err(self.inconsistent(handle))
        };
        self.freed.notify_all();
        result
    }

    /// Block until the pane is empty, hidden, or already showing `claimant`.
    ///
    /// The pane lock is released while waiting and re-taken before this
    /// returns. Must not be called from the context that would perform the
    /// matching hide.
    pub fn wait_until_free(&mut self, claimant: &ContentHandle) {
        while !self.is_free_for(claimant) {
            log::trace!("Waiting for {} pane to free up for {}", self.region, claimant);
            self.freed.wait(&mut self.slot);
        }
    }

    pub fn snapshot(&self) -> PaneSnapshot {
        PaneSnapshot {
            region: self.region,
            bound: self.slot.bound.as_ref().map(|h| h.id()),
            visible: self.slot.visible,
            hides: self.slot.hides,
        }
    }

    fn mark_hidden(&mut self) {
        self.slot.visible = false;
        self.slot.hides += 1;
        self.freed.notify_all();
    }

    fn inconsistent(&self, handle: &ContentHandle) -> PaneError {
        PaneError::InconsistentBinding {
            region: self.region,
            content: handle.to_string(),
        }
    }
}
