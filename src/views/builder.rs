use super::{EditorView, FileBrowserView, TerminalView};
use crate::content::{BuildRequest, ContentBuilder, ContentKind, ContentView};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Builds the headless views.
///
/// Editors opened without a file get an `untitled-<uuid>.txt` path in the
/// workspace directory. With `scratch_placeholders` set the placeholder
/// file is created right away, otherwise it only appears on first save.
#[derive(Debug, Clone)]
pub struct HeadlessBuilder {
    scratch_placeholders: bool,
}

impl HeadlessBuilder {
    pub fn new(scratch_placeholders: bool) -> Self {
        Self {
            scratch_placeholders,
        }
    }

    fn scratch_path(&self, request: &BuildRequest<'_>) -> Result<PathBuf> {
        let path = request
            .workspace_dir
            .join(format!("untitled-{}.txt", uuid::Uuid::new_v4()));
        if self.scratch_placeholders {
            std::fs::create_dir_all(request.workspace_dir).with_context(|| {
                format!("Failed to create workspace {:?}", request.workspace_dir)
            })?;
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .with_context(|| format!("Failed to create scratch file {:?}", path))?;
        }
        Ok(path)
    }
}

impl Default for HeadlessBuilder {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ContentBuilder for HeadlessBuilder {
    fn build(&self, request: &BuildRequest<'_>) -> Result<Arc<dyn ContentView>> {
        let view: Arc<dyn ContentView> = match request.kind {
            ContentKind::Terminal => Arc::new(TerminalView::new(request.workspace_dir)),
            ContentKind::FileBrowser => Arc::new(FileBrowserView::new(request.workspace_dir)),
            ContentKind::Editor => {
                let path = match request.file {
                    Some(file) if file.is_relative() => request.workspace_dir.join(file),
                    Some(file) => file.to_path_buf(),
                    None => self.scratch_path(request)?,
                };
                Arc::new(EditorView::open(&path)?)
            }
        };
        Ok(view)
    }
}
