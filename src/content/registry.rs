//! Registry of live content views, keyed by tag.
//!
//! The registry is the single source of truth for what exists. An entry
//! does not imply the view is visible: the terminal and file browser stay
//! registered while hidden, and editors stay registered while parked.
//!
//! Not internally synchronized. The orchestrator keeps it behind its own
//! mutex and only touches it after taking the relevant pane lock.

use super::{ContentHandle, ContentKind, ContentTag};
use crate::pool::Permit;
use std::collections::HashMap;

/// A registered view plus the editor permit it holds, if any.
///
/// Dropping the entry releases the permit.
#[derive(Debug)]
pub struct Registered {
    pub handle: ContentHandle,
    pub permit: Option<Permit>,
}

#[derive(Debug, Default)]
pub struct ContentRegistry {
    entries: HashMap<ContentTag, Registered>,
    /// Editor tags in the order they were opened
    editor_order: Vec<ContentTag>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, tag: &ContentTag) -> Option<ContentHandle> {
        self.entries.get(tag).map(|entry| entry.handle.clone())
    }

    /// Register `handle` under its tag, returning whatever it displaced
    pub fn put(&mut self, handle: ContentHandle, permit: Option<Permit>) -> Option<Registered> {
        let tag = handle.tag().clone();
        if tag.kind() == ContentKind::Editor {
            self.editor_order.retain(|t| t != &tag);
            self.editor_order.push(tag.clone());
        }
        self.entries.insert(tag, Registered { handle, permit })
    }

    pub fn remove(&mut self, tag: &ContentTag) -> Option<Registered> {
        let removed = self.entries.remove(tag)?;
        self.editor_order.retain(|t| t != tag);
        Some(removed)
    }

    /// Tag under which this exact instance is registered
    pub fn find_tag_by_handle(&self, handle: &ContentHandle) -> Option<ContentTag> {
        self.entries
            .get(handle.tag())
            .filter(|entry| entry.handle == *handle)
            .map(|entry| entry.handle.tag().clone())
    }

    /// Remove this exact instance; a newer instance under the same tag is left alone
    pub fn remove_handle(&mut self, handle: &ContentHandle) -> Option<Registered> {
        let tag = self.find_tag_by_handle(handle)?;
        self.remove(&tag)
    }

    pub fn contains(&self, handle: &ContentHandle) -> bool {
        self.find_tag_by_handle(handle).is_some()
    }

    /// Open editor tags, oldest first
    pub fn editor_tags(&self) -> Vec<ContentTag> {
        self.editor_order.clone()
    }

    pub fn live_editors(&self) -> usize {
        self.editor_order.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
