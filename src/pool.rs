//! Counting permit pool bounding how many editor views may be live.
//!
//! A [`Permit`] is acquired before an editor handle is constructed and
//! travels with that handle's registry entry. Dropping the permit releases
//! it, so every exit path (including early `?` returns while an editor is
//! being set up) gives the permit back exactly once.

use parking_lot::{Condvar, Mutex};
use std::fmt;
use std::sync::Arc;

struct PoolInner {
    capacity: usize,
    available: Mutex<usize>,
    released: Condvar,
}

/// Shared handle to the editor permit pool
#[derive(Clone)]
pub struct EditorPool {
    inner: Arc<PoolInner>,
}

impl EditorPool {
    /// Create a pool with `capacity` permits (at least one)
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            log::warn!("Editor pool capacity 0 requested, using 1");
        }
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(PoolInner {
                capacity,
                available: Mutex::new(capacity),
                released: Condvar::new(),
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    pub fn available(&self) -> usize {
        *self.inner.available.lock()
    }

    /// Permits currently held by live editors
    pub fn outstanding(&self) -> usize {
        self.inner.capacity - self.available()
    }

    /// Block until a permit is free and take it.
    ///
    /// There is no timeout: the caller stays suspended until some other
    /// context releases a permit. Never call this from the main sequence.
    pub fn acquire(&self) -> Permit {
        let mut available = self.inner.available.lock();
        while *available == 0 {
            log::debug!("Editor pool exhausted, waiting for a release");
            self.inner.released.wait(&mut available);
        }
        *available -= 1;
        Permit {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Take a permit if one is free, without blocking
    pub fn try_acquire(&self) -> Option<Permit> {
        let mut available = self.inner.available.lock();
        if *available == 0 {
            return None;
        }
        *available -= 1;
        Some(Permit {
            inner: Arc::clone(&self.inner),
        })
    }
}

impl fmt::Debug for EditorPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorPool")
            .field("capacity", &self.capacity())
            .field("available", &self.available())
            .finish()
    }
}

/// One acquired editor slot; released on drop.
#[must_use = "dropping a permit releases it immediately"]
pub struct Permit {
    inner: Arc<PoolInner>,
}

impl Permit {
    /// Give the permit back to the pool, waking one waiter
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for Permit {
    fn drop(&mut self) {
        let mut available = self.inner.available.lock();
        debug_assert!(*available < self.inner.capacity, "permit released twice");
        *available += 1;
        self.inner.released.notify_one();
    }
}

impl fmt::Debug for Permit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Permit").finish_non_exhaustive()
    }
}
