//! Content kinds and the stable tags that address live instances.

use crate::pane::Region;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// What a content view is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Shell session; at most one live instance
    Terminal,
    /// Workspace directory browser; at most one live instance
    FileBrowser,
    /// Text editor; one instance per opened file or scratch buffer
    Editor,
}

impl ContentKind {
    /// Region this kind of content is always hosted in.
    ///
    /// Terminal and editors share the left pane; the file browser owns the
    /// right one. A handle therefore can only ever be bound to one pane.
    pub fn home_region(self) -> Region {
        match self {
            ContentKind::Terminal | ContentKind::Editor => Region::Left,
            ContentKind::FileBrowser => Region::Right,
        }
    }

    /// Whether the kind is addressed by kind alone
    pub fn is_singleton(self) -> bool {
        !matches!(self, ContentKind::Editor)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Terminal => "terminal",
            ContentKind::FileBrowser => "file browser",
            ContentKind::Editor => "editor",
        };
        f.write_str(name)
    }
}

/// Identity of an editor instance
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorTag {
    /// Opened against a file
    File(PathBuf),
    /// Opened without a file; numbered in creation order
    Scratch(u64),
}

/// Stable registry key for a live content view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentTag {
    Terminal,
    FileBrowser,
    Editor(EditorTag),
}

impl ContentTag {
    /// Tag of the editor opened against `path`
    pub fn for_file(path: &Path) -> Self {
        ContentTag::Editor(EditorTag::File(path.to_path_buf()))
    }

    /// Tag of a singleton kind; `None` for editors
    pub fn singleton(kind: ContentKind) -> Option<Self> {
        match kind {
            ContentKind::Terminal => Some(ContentTag::Terminal),
            ContentKind::FileBrowser => Some(ContentTag::FileBrowser),
            ContentKind::Editor => None,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            ContentTag::Terminal => ContentKind::Terminal,
            ContentTag::FileBrowser => ContentKind::FileBrowser,
            ContentTag::Editor(_) => ContentKind::Editor,
        }
    }
}

impl fmt::Display for ContentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentTag::Terminal => f.write_str("TERMINAL"),
            ContentTag::FileBrowser => f.write_str("FILE_BROWSER"),
            ContentTag::Editor(EditorTag::File(path)) => write!(f, "EDITOR:{}", path.display()),
            ContentTag::Editor(EditorTag::Scratch(n)) => write!(f, "EDITOR:scratch-{n}"),
        }
    }
}
