use crate::content::{ContentView, DirectoryListing};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the entries of one directory, read fresh on every call
#[derive(Debug)]
pub struct FileBrowserView {
    root: PathBuf,
}

impl FileBrowserView {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl ContentView for FileBrowserView {
    fn title(&self) -> String {
        format!("files: {}", self.root.display())
    }

    fn as_listing(&self) -> Option<&dyn DirectoryListing> {
        Some(self)
    }
}

impl DirectoryListing for FileBrowserView {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    /// Directories first, then files, each sorted by name.
    /// An unreadable root lists as empty.
    fn entries(&self) -> Vec<String> {
        let read = match fs::read_dir(&self.root) {
            Ok(read) => read,
            Err(e) => {
                log::warn!("Cannot list {:?}: {}", self.root, e);
                return Vec::new();
            }
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in read.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            match entry.file_type() {
                Ok(t) if t.is_dir() => dirs.push(format!("{name}/")),
                _ => files.push(name),
            }
        }
        dirs.sort();
        files.sort();
        dirs.extend(files);
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entries_directories_first() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let view = FileBrowserView::new(dir.path());
        assert_eq!(view.entries(), vec!["src/", "a.txt", "b.txt"]);
        assert!(view.as_listing().is_some());
        assert!(view.as_document().is_none());
    }

    #[test]
    fn test_missing_root_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let view = FileBrowserView::new(&dir.path().join("gone"));
        assert!(view.entries().is_empty());
    }
}
