//! Host application boundary
//!
//! urilauncher never talks to a host directly. The dispatcher and resolver
//! see only these traits plus the per-invocation [`ResolutionContext`]; a
//! host adapter implements them at the edge.

mod context;
mod system;
mod traits;

pub use context::ResolutionContext;
pub use system::{LogNotifier, SystemUriOpener};
pub use traits::{ActiveFile, Editor, MetadataSource, Notifier, UriOpener};
