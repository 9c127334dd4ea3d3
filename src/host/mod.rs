//! View-hosting commit interface.
//!
//! The orchestrator never manipulates hosted views one call at a time.
//! Each pane change is collected into a [`Transaction`] and handed to the
//! [`ViewHost`] in a single `commit`, so anything observing the hosted
//! views sees the whole change or none of it.

mod recording;

pub use recording::{HostedView, RecordingHost};

use crate::content::{ContentHandle, ContentId, ContentTag};
use crate::pane::Region;

/// One view-hosting instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Attach a newly constructed view to a region, initially hidden
    Add {
        id: ContentId,
        tag: ContentTag,
        region: Region,
    },
    Show(ContentId),
    Hide(ContentId),
    /// Detach and forget a view; implies hiding it
    Remove(ContentId),
}

/// Ordered batch of directives applied atomically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    directives: Vec<Directive>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, handle: &ContentHandle, region: Region) {
        self.directives.push(Directive::Add {
            id: handle.id(),
            tag: handle.tag().clone(),
            region,
        });
    }

    pub fn show(&mut self, handle: &ContentHandle) {
        self.directives.push(Directive::Show(handle.id()));
    }

    pub fn hide(&mut self, handle: &ContentHandle) {
        self.directives.push(Directive::Hide(handle.id()));
    }

    pub fn remove(&mut self, handle: &ContentHandle) {
        self.directives.push(Directive::Remove(handle.id()));
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn into_directives(self) -> Vec<Directive> {
        self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }
}

/// The external system that actually hosts content views.
pub trait ViewHost: Send + Sync {
    /// Apply every directive in `transaction` as one unit
    fn commit(&self, transaction: Transaction);
}
