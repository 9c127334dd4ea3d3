//! Background editor saves.
//!
//! The write runs on the runtime's blocking pool; completion is reported
//! to the main sequence as [`ShellEvent::SaveFinished`].

use crate::content::ContentHandle;
use crate::main_sequence::{EventPoster, ShellEvent};
use anyhow::{Context, Result};
use std::fs;
use tokio::task::JoinHandle;

/// Write the editor's document to disk; returns the number of bytes written
pub fn save_document(editor: &ContentHandle) -> Result<usize> {
    let document = editor
        .view()
        .as_document()
        .with_context(|| format!("{editor} has no document to save"))?;
    let path = document.path();
    let contents = document.contents();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(&path, &contents).with_context(|| format!("Failed to write {:?}", path))?;
    document.mark_saved();
    Ok(contents.len())
}

/// Save `editor` in the background and post the outcome through `poster`.
///
/// Returns `None` when the editor has no document capability.
pub fn spawn_save(
    runtime: &tokio::runtime::Handle,
    editor: ContentHandle,
    poster: EventPoster,
) -> Option<JoinHandle<()>> {
    if editor.view().as_document().is_none() {
        log::warn!("Cannot save {}: not a document", editor);
        return None;
    }

    let handle = runtime.spawn(async move {
        let target = editor.clone();
        let success = match tokio::task::spawn_blocking(move || save_document(&target)).await {
            Ok(Ok(bytes)) => {
                crate::debug_info!("SAVE", "Wrote {} bytes for {}", bytes, editor);
                true
            }
            Ok(Err(e)) => {
                log::error!("Save of {} failed: {:#}", editor, e);
                false
            }
            Err(e) => {
                log::error!("Save task panicked for {}: {}", editor, e);
                false
            }
        };
        if !poster.post(ShellEvent::SaveFinished { editor, success }) {
            log::warn!("Main sequence gone before save completion was delivered");
        }
    });
    Some(handle)
}
