use crate::content::{ContentView, Document};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
struct Buffer {
    text: String,
    modified: bool,
}

/// In-memory text buffer backed by one file
#[derive(Debug)]
pub struct EditorView {
    path: PathBuf,
    buffer: Mutex<Buffer>,
}

impl EditorView {
    /// Open `path`, loading its contents when the file exists
    pub fn open(path: &Path) -> Result<Self> {
        let text = if path.exists() {
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?
        } else {
            String::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            buffer: Mutex::new(Buffer {
                text,
                modified: false,
            }),
        })
    }
}

impl ContentView for EditorView {
    fn title(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        if self.buffer.lock().modified {
            format!("{name} *")
        } else {
            name
        }
    }

    fn as_document(&self) -> Option<&dyn Document> {
        Some(self)
    }
}

impl Document for EditorView {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn contents(&self) -> String {
        self.buffer.lock().text.clone()
    }

    fn set_contents(&self, text: &str) {
        let mut buffer = self.buffer.lock();
        buffer.text = text.to_string();
        buffer.modified = true;
    }

    fn is_modified(&self) -> bool {
        self.buffer.lock().modified
    }

    fn mark_saved(&self) {
        self.buffer.lock().modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_loads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# notes\n").unwrap();

        let view = EditorView::open(&path).unwrap();
        assert_eq!(view.contents(), "# notes\n");
        assert!(!view.is_modified());
        assert_eq!(view.title(), "notes.md");
    }

    #[test]
    fn test_edit_marks_modified_until_saved() {
        let dir = TempDir::new().unwrap();
        let view = EditorView::open(&dir.path().join("new.txt")).unwrap();
        assert_eq!(view.contents(), "");

        view.set_contents("hello");
        assert!(view.is_modified());
        assert_eq!(view.title(), "new.txt *");
        view.mark_saved();
        assert!(!view.is_modified());
    }

    #[test]
    fn test_open_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(EditorView::open(dir.path()).is_err());
    }
}
