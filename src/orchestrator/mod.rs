//! Pane orchestrator: the public component that binds content to regions.
//!
//! Every mutation follows the same discipline:
//! 1. take the home pane's lock (Left for terminal/editors, Right for the
//!    file browser)
//! 2. consult or update the registry under its own short-lived lock
//! 3. collect directives into one [`Transaction`] and commit it to the
//!    [`ViewHost`] before the pane lock is released
//!
//! Lock order is pane → registry; the pool's lock is a leaf. No operation
//! ever holds both pane locks, and the only blocking waits (pool acquire,
//! pane wait) happen with no other orchestrator lock held.

mod editor;
mod input;
mod remove;
mod switch;


pub use input::Control;

use crate::config::{AcquireMode, Config};
use crate::content::{
    ContentBuilder, ContentFactory, ContentHandle, ContentKind, ContentRegistry, ContentTag,
};
use crate::error::PaneError;
use crate::host::{Transaction, ViewHost};
use crate::pane::{PaneSnapshot, PaneState, Region};
use crate::pool::EditorPool;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, ThreadId};

/// Construction parameters owned by one orchestrator instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorSettings {
    /// Maximum number of live editor views
    pub editor_capacity: usize,
    /// What `open_editor` does when the pool is at capacity
    pub acquire_mode: AcquireMode,
    /// Workspace root handed to content builders
    pub workspace_dir: PathBuf,
}

impl OrchestratorSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            editor_capacity: config.editor_capacity,
            acquire_mode: config.acquire_mode,
            workspace_dir: config.effective_workspace_dir(),
        }
    }
}

pub struct PaneOrchestrator {
    factory: ContentFactory,
    registry: Mutex<ContentRegistry>,
    pool: EditorPool,
    acquire_mode: AcquireMode,
    left: PaneState,
    right: PaneState,
    host: Arc<dyn ViewHost>,
    /// Thread running the serial dispatch loop, once one has been entered
    main_sequence: Mutex<Option<ThreadId>>,
    /// Installed input listeners; cleared by `cleanup`
    listeners: Mutex<HashMap<Control, ContentKind>>,
}

impl PaneOrchestrator {
    pub fn new(
        settings: OrchestratorSettings,
        builder: Arc<dyn ContentBuilder>,
        host: Arc<dyn ViewHost>,
    ) -> Self {
        crate::debug_info!(
            "PANE",
            "Orchestrator created: capacity={} mode={} workspace={}",
            settings.editor_capacity,
            settings.acquire_mode.display_name(),
            settings.workspace_dir.display()
        );
        Self {
            factory: ContentFactory::new(builder, settings.workspace_dir),
            registry: Mutex::new(ContentRegistry::new()),
            pool: EditorPool::new(settings.editor_capacity),
            acquire_mode: settings.acquire_mode,
            left: PaneState::new(Region::Left),
            right: PaneState::new(Region::Right),
            host,
            main_sequence: Mutex::new(None),
            listeners: Mutex::new(input::default_listeners()),
        }
    }

    /// Mark the calling thread as the main sequence.
    ///
    /// Blocking operations invoked from this thread fail fast instead of
    /// waiting for a wake-up only this thread could deliver.
    pub fn enter_main_sequence(&self) {
        *self.main_sequence.lock() = Some(thread::current().id());
    }

    /// Forget the main sequence, if the calling thread is it
    pub fn leave_main_sequence(&self) {
        let mut main = self.main_sequence.lock();
        if *main == Some(thread::current().id()) {
            *main = None;
        }
    }

    pub fn is_main_sequence(&self) -> bool {
        *self.main_sequence.lock() == Some(thread::current().id())
    }

    /// Handle bound to `region`, visible or not
    pub fn currently_bound(&self, region: Region) -> Option<ContentHandle> {
        self.pane(region).current()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.pane(region).is_visible()
    }

    pub fn snapshot(&self, region: Region) -> PaneSnapshot {
        self.pane(region).snapshot()
    }

    pub fn lookup(&self, tag: &ContentTag) -> Option<ContentHandle> {
        self.registry.lock().lookup(tag)
    }

    /// Whether `handle` is still registered
    pub fn is_live(&self, handle: &ContentHandle) -> bool {
        self.registry.lock().contains(handle)
    }

    /// Open editor tags, oldest first
    pub fn editor_tags(&self) -> Vec<ContentTag> {
        self.registry.lock().editor_tags()
    }

    pub fn live_editors(&self) -> usize {
        self.registry.lock().live_editors()
    }

    pub fn pool(&self) -> &EditorPool {
        &self.pool
    }

    pub fn acquire_mode(&self) -> AcquireMode {
        self.acquire_mode
    }

    pub fn workspace_dir(&self) -> &Path {
        self.factory.workspace_dir()
    }

    fn pane(&self, region: Region) -> &PaneState {
        match region {
            Region::Left => &self.left,
            Region::Right => &self.right,
        }
    }

    /// Hand a non-empty batch to the view host
    fn commit(&self, tx: Transaction) {
        if tx.is_empty() {
            return;
        }
        crate::debug_trace!("PANE", "Committing {} directives", tx.len());
        self.host.commit(tx);
    }

    /// Registered singleton of `kind`, constructing it on first use.
    ///
    /// Must be called with the kind's home pane locked, so two callers can
    /// never both construct the singleton.
    fn singleton(&self, kind: ContentKind, tx: &mut Transaction) -> Result<ContentHandle, PaneError> {
        let tag = ContentTag::singleton(kind).ok_or(PaneError::UnsupportedKind(kind))?;
        if let Some(existing) = self.registry.lock().lookup(&tag) {
            return Ok(existing);
        }

        let handle = self.factory.create(kind, None)?;
        self.registry.lock().put(handle.clone(), None);
        tx.add(&handle, kind.home_region());
        crate::debug_info!("PANE", "Created {} singleton {}", kind, handle);
        Ok(handle)
    }
}

impl std::fmt::Debug for PaneOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaneOrchestrator")
            .field("pool", &self.pool)
            .field("acquire_mode", &self.acquire_mode)
            .field("left", &self.left.snapshot())
            .field("right", &self.right.snapshot())
            .finish_non_exhaustive()
    }
}
