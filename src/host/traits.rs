//! Host boundary traits
//!
//! Everything the resolver and dispatcher need from the host application
//! lives behind these traits, so the core runs (and tests) without a host.

use async_trait::async_trait;

/// The file currently focused in the host workspace
#[async_trait]
pub trait ActiveFile: Send + Sync {
    /// Base name, no path and no extension
    fn basename(&self) -> &str;

    /// Full path within the containing vault
    fn path(&self) -> &str;

    /// Whether plain-text extraction is defined for this file
    fn is_markdown(&self) -> bool;

    /// Full text content of the file
    async fn read_text(&self) -> std::io::Result<String>;
}

/// The host editor, when one is focused
pub trait Editor: Send + Sync {
    /// Current text selection, empty when nothing is selected
    fn selection(&self) -> String;

    /// Text of the line under the cursor
    fn current_line(&self) -> String;
}

/// Optional metadata lookup capability scoped to a file
///
/// Provided by a separate host plugin; absence is normal and degrades to a
/// user-facing error at resolution time.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Value of `field` on the file at `path`, if set
    async fn field(&self, path: &str, field: &str) -> Option<String>;
}

/// Platform URI-opening facility
pub trait UriOpener: Send + Sync {
    fn open(&self, uri: &str) -> std::io::Result<()>;
}

/// Single-line transient user notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
