//! Plugin facade
//!
//! Wires the store, dispatcher and host services together: loads settings at
//! startup, registers every stored command, and owns the add / edit / remove
//! flows with their user-facing notices. Every failure here recovers locally;
//! the plugin stays loaded and usable after any of them.

use std::path::PathBuf;
use std::sync::Arc;

use eyre::{Context, Result};
use parking_lot::RwLock;
use tracing::info;

use crate::commands::{CommandDispatcher, CommandRegistrar, CommandStore, HostCommand, StoreError};
use crate::domain::UriCommand;
use crate::host::{Notifier, UriOpener};
use crate::settings::MissingFieldPolicy;

/// The plugin core a host adapter drives
pub struct UriLauncher {
    store: Arc<RwLock<CommandStore>>,
    dispatcher: CommandDispatcher,
    registrar: Arc<dyn CommandRegistrar>,
    notifier: Arc<dyn Notifier>,
}

impl UriLauncher {
    /// Load settings and register every stored command with the host
    pub fn load(
        settings_path: impl Into<PathBuf>,
        registrar: Arc<dyn CommandRegistrar>,
        opener: Arc<dyn UriOpener>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let store = CommandStore::load(settings_path).context("Failed to load settings")?;
        info!(commands = store.commands().len(), "urilauncher loaded");

        let store = Arc::new(RwLock::new(store));
        let dispatcher = CommandDispatcher::new(Arc::clone(&store), opener, Arc::clone(&notifier));
        dispatcher.register_all(registrar.as_ref());

        Ok(Self {
            store,
            dispatcher,
            registrar,
            notifier,
        })
    }

    /// Commands currently in the store, in stored order
    pub fn commands(&self) -> Vec<UriCommand> {
        self.store.read().commands().to_vec()
    }

    /// Add a new command and register it with the host
    ///
    /// A derived-id collision rejects the command with a user notice and
    /// persists nothing.
    pub fn add_command(&self, command: UriCommand) -> Result<(), StoreError> {
        let bound = self.dispatcher.bind(&command);
        match self.store.write().add(command) {
            Ok(()) => {
                self.registrar.register(bound);
                Ok(())
            }
            Err(e @ StoreError::DuplicateName { .. }) => {
                self.notifier
                    .notify("A URI command with this name already exists. Please choose a new name.");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Replace a stored command and hot-swap the host registration
    ///
    /// Hosts that cannot retract a registered command get a restart notice
    /// instead; the stored record is updated either way.
    pub fn update_command(&self, command: UriCommand) -> Result<(), StoreError> {
        let bound = self.dispatcher.bind(&command);
        self.store.write().update(command)?;
        if self.registrar.unregister(bound.id()) {
            self.registrar.register(bound);
        } else {
            self.notifier.notify("Restart the app for the command change to take effect.");
        }
        Ok(())
    }

    /// Remove a command from the store and, best-effort, from the host
    pub fn remove_command(&self, id: &str) -> Result<UriCommand, StoreError> {
        let removed = self.store.write().remove(id)?;
        if !self.registrar.unregister(id) {
            self.notifier.notify("Restart the app to fully remove the command.");
        }
        Ok(removed)
    }

    /// Toggle the resolved-URI echo notice
    pub fn set_show_open_notice(&self, on: bool) -> Result<(), StoreError> {
        self.store.write().set_show_open_notice(on)
    }

    /// Change the missing-metadata-field policy
    pub fn set_missing_field(&self, policy: MissingFieldPolicy) -> Result<(), StoreError> {
        self.store.write().set_missing_field(policy)
    }
}
