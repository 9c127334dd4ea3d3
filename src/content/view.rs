//! Capability interfaces between the orchestrator and content collaborators.
//!
//! The orchestrator never inspects a concrete view type. Collaborators that
//! need something beyond the base [`ContentView`] contract ask for a
//! capability (`as_document`, `as_listing`) and get `None` when the view
//! does not offer it.

use super::ContentKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A content view hosted in a pane.
pub trait ContentView: Send + Sync {
    /// Short human-readable title
    fn title(&self) -> String;

    /// Editable document capability
    fn as_document(&self) -> Option<&dyn Document> {
        None
    }

    /// Directory listing capability
    fn as_listing(&self) -> Option<&dyn DirectoryListing> {
        None
    }

    /// Called once after the view has been permanently removed
    fn dispose(&self) {}
}

/// A file-backed text buffer.
pub trait Document: Send + Sync {
    /// File the buffer saves to
    fn path(&self) -> PathBuf;

    /// Current buffer contents
    fn contents(&self) -> String;

    /// Replace the buffer contents, marking the document modified
    fn set_contents(&self, text: &str);

    /// Whether there are unsaved modifications
    fn is_modified(&self) -> bool;

    /// Record that the current contents reached disk
    fn mark_saved(&self);
}

/// A browsable directory.
pub trait DirectoryListing: Send + Sync {
    /// Directory being browsed
    fn root(&self) -> PathBuf;

    /// Entry names, directories suffixed with `/`
    fn entries(&self) -> Vec<String>;
}

/// Everything a builder needs to construct one view.
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    pub kind: ContentKind,
    /// Target file; only ever set for editors
    pub file: Option<&'a Path>,
    /// Workspace root owned by the orchestrator
    pub workspace_dir: &'a Path,
}

/// Content construction service.
///
/// Implemented by the host application; failures are reported as `anyhow`
/// errors and surface from the orchestrator as `PaneError::ContentSetup`.
pub trait ContentBuilder: Send + Sync {
    fn build(&self, request: &BuildRequest<'_>) -> anyhow::Result<Arc<dyn ContentView>>;
}
