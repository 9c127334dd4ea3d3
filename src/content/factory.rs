//! Construction of fresh content views.

use super::view::{BuildRequest, ContentBuilder};
use super::{ContentHandle, ContentId, ContentKind, ContentTag, EditorTag};
use crate::error::PaneError;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Builds content handles through the host's [`ContentBuilder`].
///
/// Construction has no side effects on panes or the registry; the caller
/// decides where the new handle goes.
pub struct ContentFactory {
    builder: Arc<dyn ContentBuilder>,
    workspace_dir: PathBuf,
    next_id: AtomicU64,
    next_scratch: AtomicU64,
}

impl ContentFactory {
    pub fn new(builder: Arc<dyn ContentBuilder>, workspace_dir: PathBuf) -> Self {
        Self {
            builder,
            workspace_dir,
            next_id: AtomicU64::new(1),
            next_scratch: AtomicU64::new(1),
        }
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    /// Absolute, lexically normalised form of an editor's target file.
    ///
    /// Relative paths are joined onto the workspace directory. `.` segments
    /// are dropped and `..` pops the previous normal segment. The file does
    /// not have to exist, so symlinks are left alone.
    pub fn resolve_file(&self, file: &Path) -> PathBuf {
        let joined = if file.is_relative() {
            self.workspace_dir.join(file)
        } else {
            file.to_path_buf()
        };

        let mut resolved = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(resolved.components().next_back(), Some(Component::Normal(_))) {
                        resolved.pop();
                    } else if !resolved.has_root() {
                        resolved.push(component);
                    }
                }
                other => resolved.push(other),
            }
        }
        resolved
    }

    /// Construct a new view of `kind`.
    ///
    /// Editors opened without a file get the next scratch tag. Editor files
    /// go through [`resolve_file`](Self::resolve_file) first, so the tag and
    /// the builder see the same path. A file parameter for any other kind is
    /// rejected with `UnsupportedKind`.
    pub fn create(&self, kind: ContentKind, file: Option<&Path>) -> Result<ContentHandle, PaneError> {
        let resolved = match (kind, file) {
            (ContentKind::Editor, Some(path)) => Some(self.resolve_file(path)),
            _ => None,
        };
        let tag = match (kind, resolved.as_deref()) {
            (ContentKind::Editor, Some(path)) => ContentTag::for_file(path),
            (ContentKind::Editor, None) => {
                let n = self.next_scratch.fetch_add(1, Ordering::Relaxed);
                ContentTag::Editor(EditorTag::Scratch(n))
            }
            (_, _) if file.is_some() => return Err(PaneError::UnsupportedKind(kind)),
            (singleton, _) => {
                ContentTag::singleton(singleton).ok_or(PaneError::UnsupportedKind(singleton))?
            }
        };

        let request = BuildRequest {
            kind,
            file: resolved.as_deref(),
            workspace_dir: &self.workspace_dir,
        };
        let view = self
            .builder
            .build(&request)
            .map_err(|e| PaneError::ContentSetup {
                kind,
                reason: format!("{e:#}"),
            })?;

        let id = ContentId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        log::debug!("Constructed {} content {} ({})", kind, id, tag);
        Ok(ContentHandle::new(id, tag, view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::view::ContentView;

    struct Plain;

    impl ContentView for Plain {
        fn title(&self) -> String {
            "plain".to_string()
        }
    }

    struct PlainBuilder;

    impl ContentBuilder for PlainBuilder {
        fn build(&self, request: &BuildRequest<'_>) -> anyhow::Result<Arc<dyn ContentView>> {
            if request.file == Some(Path::new("/broken")) {
                anyhow::bail!("cannot read /broken");
            }
            Ok(Arc::new(Plain))
        }
    }

    fn factory() -> ContentFactory {
        ContentFactory::new(Arc::new(PlainBuilder), PathBuf::from("/ws"))
    }

    #[test]
    fn test_singleton_tags_and_unique_ids() {
        let factory = factory();
        let a = factory.create(ContentKind::Terminal, None).unwrap();
        let b = factory.create(ContentKind::FileBrowser, None).unwrap();
        assert_eq!(a.tag(), &ContentTag::Terminal);
        assert_eq!(b.tag(), &ContentTag::FileBrowser);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_file_parameter_rejected_for_singletons() {
        let factory = factory();
        let err = factory
            .create(ContentKind::Terminal, Some(Path::new("/ws/a.txt")))
            .unwrap_err();
        assert_eq!(err, PaneError::UnsupportedKind(ContentKind::Terminal));
        let err = factory
            .create(ContentKind::FileBrowser, Some(Path::new("/ws/a.txt")))
            .unwrap_err();
        assert_eq!(err, PaneError::UnsupportedKind(ContentKind::FileBrowser));
    }

    #[test]
    fn test_scratch_editors_get_distinct_tags() {
        let factory = factory();
        let a = factory.create(ContentKind::Editor, None).unwrap();
        let b = factory.create(ContentKind::Editor, None).unwrap();
        assert_ne!(a.tag(), b.tag());
        assert_eq!(a.kind(), ContentKind::Editor);
    }

    #[test]
    fn test_file_spellings_resolve_to_one_tag() {
        let factory = factory();
        let relative = factory
            .create(ContentKind::Editor, Some(Path::new("notes.md")))
            .unwrap();
        let dotted = factory
            .create(ContentKind::Editor, Some(Path::new("./sub/../notes.md")))
            .unwrap();
        let absolute = factory
            .create(ContentKind::Editor, Some(Path::new("/ws/./notes.md")))
            .unwrap();
        let expected = ContentTag::for_file(Path::new("/ws/notes.md"));
        assert_eq!(relative.tag(), &expected);
        assert_eq!(dotted.tag(), &expected);
        assert_eq!(absolute.tag(), &expected);
    }

    #[test]
    fn test_resolve_file_stops_at_root() {
        let factory = factory();
        assert_eq!(factory.resolve_file(Path::new("/../a.txt")), PathBuf::from("/a.txt"));
        assert_eq!(factory.resolve_file(Path::new("../up.txt")), PathBuf::from("/up.txt"));
    }

    #[test]
    fn test_builder_failure_becomes_content_setup() {
        let factory = factory();
        let err = factory
            .create(ContentKind::Editor, Some(Path::new("/broken")))
            .unwrap_err();
        match err {
            PaneError::ContentSetup { kind, reason } => {
                assert_eq!(kind, ContentKind::Editor);
                assert!(reason.contains("/broken"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
