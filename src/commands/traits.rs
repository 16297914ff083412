//! Host command protocol
//!
//! One [`HostCommand`] per stored command is handed to the host through a
//! [`CommandRegistrar`]. The host calls `is_available` on every palette
//! check and `run` on invocation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::host::ResolutionContext;

use super::dispatcher::CommandError;

/// A command as the host sees it
#[async_trait]
pub trait HostCommand: Send + Sync {
    /// Stable command id
    fn id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// Host icon name, if any
    fn icon(&self) -> Option<&str>;

    /// Whether the command can run against the given context
    ///
    /// Recomputed on every check; the answer changes as the user moves
    /// between files and editors, so it must never be cached.
    fn is_available(&self, ctx: &ResolutionContext) -> bool;

    /// Resolve the template and open the URI
    async fn run(&self, ctx: &ResolutionContext) -> Result<(), CommandError>;
}

/// The host registry commands are installed into
pub trait CommandRegistrar: Send + Sync {
    /// Install a command
    fn register(&self, command: Arc<dyn HostCommand>);

    /// Retract a command by id, best-effort
    ///
    /// Returns false when this host version cannot retract a registered
    /// command without a restart.
    fn unregister(&self, id: &str) -> bool;
}
