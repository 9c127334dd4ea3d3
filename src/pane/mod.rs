//! Pane binding state for the two screen regions
//!
//! This module provides the per-region bookkeeping used by the orchestrator:
//! - `Region`: Left or Right screen area
//! - `PaneState`: Bound handle + visible flag behind a mutex/condvar pair
//! - `PaneGuard`: Locked access to one pane, the only way to mutate it
//! - `PaneSnapshot`: Copyable view of a pane for queries

mod region;
mod state;

pub use region::Region;
pub use state::{PaneGuard, PaneSnapshot, PaneState};

#[cfg(test)]
mod tests;
