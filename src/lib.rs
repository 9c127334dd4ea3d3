// Library exports for the binary, the integration tests and embedding hosts
//
// # Lock Order
//
// duopane coordinates two panes from several threads. New code must keep
// to these rules:
//
//   - pane lock, then registry lock. The registry is only touched while
//     the content's home pane is locked.
//   - The pool's lock is a leaf: never take another lock while holding it.
//   - Never hold both pane locks. Left and Right are independent.
//   - Block with nothing held. `EditorPool::acquire` and
//     `PaneGuard::wait_until_free` run with no other orchestrator lock
//     held, and never on the main sequence.
//
// Locks are `parking_lot` throughout; nothing here is held across `.await`.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod cli;
pub mod content;
pub mod error;
pub mod host;
pub mod main_sequence;
pub mod orchestrator;
pub mod pane;
pub mod pool;
pub mod save;
pub mod shell;
pub mod views;

pub use duopane_config as config;

pub use content::{ContentHandle, ContentKind, ContentTag};
pub use error::PaneError;
pub use host::{RecordingHost, Transaction, ViewHost};
pub use main_sequence::{EventPoster, MainSequence, ShellEvent};
pub use orchestrator::{Control, OrchestratorSettings, PaneOrchestrator};
pub use pane::Region;
pub use pool::EditorPool;
