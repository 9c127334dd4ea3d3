//! Content views and their bookkeeping.
//!
//! - `kind`: `ContentKind`, `ContentTag`, `EditorTag`
//! - `handle`: `ContentHandle`, `ContentId`
//! - `view`: capability traits implemented by collaborators
//! - `factory`: `ContentFactory`, lazy construction through a `ContentBuilder`
//! - `registry`: `ContentRegistry`, tag → live handle

mod factory;
mod handle;
mod kind;
mod registry;
mod view;

pub use factory::ContentFactory;
pub use handle::{ContentHandle, ContentId};
pub use kind::{ContentKind, ContentTag, EditorTag};
pub use registry::{ContentRegistry, Registered};
pub use view::{BuildRequest, ContentBuilder, ContentView, DirectoryListing, Document};
