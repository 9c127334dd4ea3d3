//! Shared integration test helpers for duopane.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::{Fixture, build_fixture};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use duopane::config::AcquireMode;
use duopane::content::{BuildRequest, ContentBuilder, ContentView};
use duopane::host::RecordingHost;
use duopane::pane::Region;
use duopane::views::HeadlessBuilder;
use duopane::{OrchestratorSettings, PaneOrchestrator};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::TempDir;

/// An orchestrator wired to a recording host and a temp workspace.
///
/// Keep the fixture alive for the whole test; dropping it removes the
/// workspace directory.
pub struct Fixture {
    pub orch: Arc<PaneOrchestrator>,
    pub host: Arc<RecordingHost>,
    pub workspace: TempDir,
}

impl Fixture {
    pub fn path(&self, name: &str) -> PathBuf {
        self.workspace.path().join(name)
    }

    /// Pool conservation: free permits plus live editors equals capacity
    pub fn assert_conserved(&self) {
        let pool = self.orch.pool();
        assert_eq!(
            pool.available() + self.orch.live_editors(),
            pool.capacity(),
            "permits leaked or double-released"
        );
    }

    /// At most one visible view per region, in both the pane and the host
    pub fn assert_exclusive(&self) {
        for region in Region::all() {
            assert!(
                self.host.visible_in(region).len() <= 1,
                "{region} region shows more than one view"
            );
            if self.orch.is_visible(region) {
                assert!(self.orch.currently_bound(region).is_some());
            }
        }
        assert_eq!(self.host.violations(), 0);
    }
}

pub fn build_fixture(capacity: usize, mode: AcquireMode) -> Fixture {
    build_fixture_with(capacity, mode, |_| {
        Arc::new(HeadlessBuilder::new(false)) as Arc<dyn ContentBuilder>
    })
}

pub fn build_fixture_with(
    capacity: usize,
    mode: AcquireMode,
    builder: impl FnOnce(&Path) -> Arc<dyn ContentBuilder>,
) -> Fixture {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let host = Arc::new(RecordingHost::new());
    let settings = OrchestratorSettings {
        editor_capacity: capacity,
        acquire_mode: mode,
        workspace_dir: workspace.path().to_path_buf(),
    };
    let orch = Arc::new(PaneOrchestrator::new(
        settings,
        builder(workspace.path()),
        host.clone(),
    ));
    Fixture {
        orch,
        host,
        workspace,
    }
}

/// Builder whose editors fail to construct while `fail_editors` is set
pub struct FlakyBuilder {
    inner: HeadlessBuilder,
    pub fail_editors: AtomicBool,
}

impl FlakyBuilder {
    pub fn new() -> Self {
        Self {
            inner: HeadlessBuilder::new(false),
            fail_editors: AtomicBool::new(false),
        }
    }
}

impl ContentBuilder for FlakyBuilder {
    fn build(&self, request: &BuildRequest<'_>) -> anyhow::Result<Arc<dyn ContentView>> {
        if request.kind == duopane::ContentKind::Editor && self.fail_editors.load(Ordering::SeqCst)
        {
            anyhow::bail!("editor backend unavailable");
        }
        self.inner.build(request)
    }
}
