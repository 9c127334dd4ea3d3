use crate::content::ContentView;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Placeholder terminal session rooted at the workspace directory
#[derive(Debug)]
pub struct TerminalView {
    cwd: PathBuf,
    disposed: AtomicBool,
}

impl TerminalView {
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl ContentView for TerminalView {
    fn title(&self) -> String {
        format!("terminal: {}", self.cwd.display())
    }

    fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
        log::debug!("Terminal session in {:?} closed", self.cwd);
    }
}
