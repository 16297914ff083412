//! Command dispatcher
//!
//! Binds stored commands to the host command protocol. A bound command holds
//! the shared store and re-reads its record on every availability check and
//! every run, so edits take effect without stale closures. Display name and
//! icon are snapshots from registration time - refreshing those is the
//! host's re-registration problem, not ours.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::UriCommand;
use crate::host::{Notifier, ResolutionContext, UriOpener};
use crate::template::{ResolveError, classify, resolve};

use super::store::CommandStore;
use super::traits::{CommandRegistrar, HostCommand};

/// Errors from dispatching a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command '{id}' is no longer in the store")]
    Unknown { id: String },

    #[error("'{name}' is not available in the current context")]
    Unavailable { name: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to open URI: {0}")]
    Open(#[source] std::io::Error),
}

/// Builds host-facing command bindings over the shared store
pub struct CommandDispatcher {
    store: Arc<RwLock<CommandStore>>,
    opener: Arc<dyn UriOpener>,
    notifier: Arc<dyn Notifier>,
}

impl CommandDispatcher {
    pub fn new(store: Arc<RwLock<CommandStore>>, opener: Arc<dyn UriOpener>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            opener,
            notifier,
        }
    }

    /// Bind a command record to the host protocol
    pub fn bind(&self, command: &UriCommand) -> Arc<dyn HostCommand> {
        Arc::new(BoundCommand {
            id: command.id.clone(),
            name: command.name.clone(),
            icon: command.icon.clone(),
            store: Arc::clone(&self.store),
            opener: Arc::clone(&self.opener),
            notifier: Arc::clone(&self.notifier),
        })
    }

    /// Register every stored command with the host
    pub fn register_all(&self, registrar: &dyn CommandRegistrar) {
        let commands: Vec<UriCommand> = self.store.read().commands().to_vec();
        for command in &commands {
            registrar.register(self.bind(command));
        }
        info!(count = commands.len(), "registered URI commands");
    }
}

struct BoundCommand {
    id: String,
    name: String,
    icon: Option<String>,
    store: Arc<RwLock<CommandStore>>,
    opener: Arc<dyn UriOpener>,
    notifier: Arc<dyn Notifier>,
}

#[async_trait]
impl HostCommand for BoundCommand {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    fn is_available(&self, ctx: &ResolutionContext) -> bool {
        let store = self.store.read();
        match store.get(&self.id) {
            Some(command) => classify(&command.template).satisfied_by(ctx),
            None => false,
        }
    }

    async fn run(&self, ctx: &ResolutionContext) -> Result<(), CommandError> {
        // Re-read the record so edits since registration take effect; the
        // lock drops before any await point.
        let (template, encode, policy, echo) = {
            let store = self.store.read();
            let command = store.get(&self.id).ok_or_else(|| CommandError::Unknown {
                id: self.id.clone(),
            })?;
            (
                command.template.clone(),
                command.encode,
                store.settings().missing_field,
                store.settings().show_open_notice,
            )
        };

        if !classify(&template).satisfied_by(ctx) {
            self.notifier.notify(&format!("'{}' is not available right now", self.name));
            return Err(CommandError::Unavailable {
                name: self.name.clone(),
            });
        }

        let uri = match resolve(&template, encode, policy, ctx).await {
            Ok(uri) => uri,
            Err(e) => {
                self.notifier.notify(&e.to_string());
                return Err(e.into());
            }
        };

        if echo {
            self.notifier.notify(&format!("Opening {uri}"));
        }

        debug!(id = %self.id, %uri, "opening URI");
        if let Err(e) = self.opener.open(&uri) {
            warn!(id = %self.id, "failed to open URI: {e}");
            self.notifier.notify("Failed to open URI");
            return Err(CommandError::Open(e));
        }

        Ok(())
    }
}
