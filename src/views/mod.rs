//! Headless content views used by the `duopane` binary and the tests.
//!
//! They implement the capability traits from [`crate::content`] without
//! rendering anything.

mod builder;
mod editor;
mod file_browser;
mod terminal;

pub use builder::HeadlessBuilder;
pub use editor::EditorView;
pub use file_browser::FileBrowserView;
pub use terminal::TerminalView;
