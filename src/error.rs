//! Typed error types for the pane orchestrator.
//!
//! Callers at the crate boundary match on these variants instead of opaque
//! `anyhow` strings. Collaborator construction failures arrive as `anyhow`
//! errors and are flattened into [`PaneError::ContentSetup`].

use crate::content::ContentKind;
use crate::pane::Region;
use thiserror::Error;

/// Errors produced by orchestrator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaneError {
    /// The operation or parameter does not apply to this content kind,
    /// e.g. a file parameter for the terminal. Programmer error; never retried.
    #[error("operation not supported for {0} content")]
    UnsupportedKind(ContentKind),

    /// The editor pool is at capacity and the caller cannot block.
    /// Recoverable by removing an editor and retrying.
    #[error("editor pool exhausted: {capacity} of {capacity} editors are open")]
    ResourceExhausted {
        /// Configured pool capacity.
        capacity: usize,
    },

    /// A hide or unbind named a handle the pane does not hold.
    /// Logged and treated as a no-op by the orchestrator.
    #[error("{region} pane does not hold content {content}")]
    InconsistentBinding {
        /// Pane the request was aimed at.
        region: Region,
        /// Display form of the handle named in the request.
        content: String,
    },

    /// The content construction service failed to build a view.
    #[error("failed to set up {kind} content: {reason}")]
    ContentSetup {
        /// Kind that was being constructed.
        kind: ContentKind,
        /// Flattened collaborator error chain.
        reason: String,
    },

    /// A blocking wait was requested from the main sequence, where the
    /// matching wake-up could never be delivered.
    #[error("refusing to block the main sequence waiting for the {region} pane")]
    WouldDeadlock {
        /// Pane the caller would have waited on.
        region: Region,
    },
}
