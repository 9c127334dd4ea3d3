//! In-memory view host used by the headless shell and the test suite.
//!
//! Applies directives to a model of hosted views and keeps the committed
//! transactions, optionally only the most recent ones. Anything a real host would reject (unknown views, double
//! adds, two visible views in one region after a commit) is counted as a
//! violation instead of panicking, so tests can assert it stayed at zero.

use super::{Directive, Transaction, ViewHost};
use crate::content::{ContentId, ContentTag};
use crate::pane::Region;
use parking_lot::Mutex;
use std::collections::{BTreeMap, VecDeque};

/// State of one hosted view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedView {
    pub tag: ContentTag,
    pub region: Region,
    pub visible: bool,
}

#[derive(Debug, Default)]
struct HostModel {
    views: BTreeMap<ContentId, HostedView>,
    commits: VecDeque<Transaction>,
    commit_count: usize,
    history_limit: Option<usize>,
    violations: usize,
}

impl HostModel {
    fn apply(&mut self, directive: &Directive) -> bool {
        match directive {
            Directive::Add { id, tag, region } => {
                if self.views.contains_key(id) {
                    return false;
                }
                self.views.insert(
                    *id,
                    HostedView {
                        tag: tag.clone(),
                        region: *region,
                        visible: false,
                    },
                );
                true
            }
            Directive::Show(id) => self.set_visible(*id, true),
            Directive::Hide(id) => self.set_visible(*id, false),
            Directive::Remove(id) => self.views.remove(id).is_some(),
        }
    }

    fn set_visible(&mut self, id: ContentId, visible: bool) -> bool {
        match self.views.get_mut(&id) {
            Some(view) => {
                view.visible = visible;
                true
            }
            None => false,
        }
    }

    fn visible_in(&self, region: Region) -> Vec<ContentId> {
        self.views
            .iter()
            .filter(|(_, v)| v.region == region && v.visible)
            .map(|(id, _)| *id)
            .collect()
    }
}

/// A [`ViewHost`] that records instead of rendering
#[derive(Debug, Default)]
pub struct RecordingHost {
    model: Mutex<HostModel>,
}

impl RecordingHost {
    /// Host that keeps every committed transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that keeps only the last `limit` transactions.
    ///
    /// Used for long-running sessions; `commit_count` still counts every
    /// commit.
    pub fn with_history_limit(limit: usize) -> Self {
        let host = Self::default();
        host.model.lock().history_limit = Some(limit);
        host
    }

    /// Number of transactions committed so far
    pub fn commit_count(&self) -> usize {
        self.model.lock().commit_count
    }

    /// Retained transactions, oldest first
    pub fn commits(&self) -> Vec<Transaction> {
        self.model.lock().commits.iter().cloned().collect()
    }

    pub fn last_commit(&self) -> Option<Transaction> {
        self.model.lock().commits.back().cloned()
    }

    pub fn view(&self, id: ContentId) -> Option<HostedView> {
        self.model.lock().views.get(&id).cloned()
    }

    /// Views currently visible in `region`
    pub fn visible_in(&self, region: Region) -> Vec<ContentId> {
        self.model.lock().visible_in(region)
    }

    pub fn hosted_count(&self) -> usize {
        self.model.lock().views.len()
    }

    /// Rejected directives plus commits that left a region with two visible views
    pub fn violations(&self) -> usize {
        self.model.lock().violations
    }
}

impl ViewHost for RecordingHost {
    fn commit(&self, transaction: Transaction) {
        let mut model = self.model.lock();
        for directive in transaction.directives() {
            if !model.apply(directive) {
                log::warn!("View host rejected directive {:?}", directive);
                model.violations += 1;
            }
        }
        for region in Region::all() {
            let visible = model.visible_in(region);
            if visible.len() > 1 {
                log::warn!(
                    "View host has {} visible views in the {} region: {:?}",
                    visible.len(),
                    region,
                    visible
                );
                model.violations += 1;
            }
        }
        log::trace!("View host committed {} directives", transaction.len());
        model.commit_count += 1;
        model.commits.push_back(transaction);
        if let Some(limit) = model.history_limit {
            while model.commits.len() > limit {
                model.commits.pop_front();
            }
        }
    }
}
