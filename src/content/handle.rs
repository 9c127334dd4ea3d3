//! Opaque references to live content views.

use super::view::ContentView;
use super::{ContentKind, ContentTag};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Unique identifier for a constructed content view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(u64);

impl ContentId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to a content view instance.
///
/// Cloning a handle does not clone the view. Two handles are equal when
/// they refer to the same constructed instance, so a handle whose tag was
/// later reused by a newer instance never matches that instance.
#[derive(Clone)]
pub struct ContentHandle {
    id: ContentId,
    tag: ContentTag,
    view: Arc<dyn ContentView>,
}

impl ContentHandle {
    pub(crate) fn new(id: ContentId, tag: ContentTag, view: Arc<dyn ContentView>) -> Self {
        Self { id, tag, view }
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn tag(&self) -> &ContentTag {
        &self.tag
    }

    pub fn kind(&self) -> ContentKind {
        self.tag.kind()
    }

    /// The collaborator's view, reachable only through its capability interface
    pub fn view(&self) -> &dyn ContentView {
        self.view.as_ref()
    }
}

impl PartialEq for ContentHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContentHandle {}

impl Hash for ContentHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ContentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentHandle")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ContentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag, self.id)
    }
}
