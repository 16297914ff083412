//! Persistent command store
//!
//! Owns the settings document and every mutation of it. Mutations persist
//! immediately, so the host data file is always the current truth and a
//! reload reproduces the store exactly.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::UriCommand;
use crate::settings::{MissingFieldPolicy, Settings};

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a command named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("no command with id '{id}'")]
    UnknownId { id: String },

    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The ordered collection of user-defined commands plus plugin flags
pub struct CommandStore {
    path: PathBuf,
    settings: Settings,
}

impl CommandStore {
    /// Load the store from the host data file; a missing file starts empty
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let settings = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            info!("No settings at {}, starting empty", path.display());
            Settings::default()
        };
        Ok(Self { path, settings })
    }

    /// Current settings document
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Stored commands, in creation order
    pub fn commands(&self) -> &[UriCommand] {
        &self.settings.commands
    }

    /// Look up a command by id
    pub fn get(&self, id: &str) -> Option<&UriCommand> {
        self.settings.commands.iter().find(|command| command.id == id)
    }

    /// Add a new command
    ///
    /// Ids must be unique at registration time; a collision (two names that
    /// slug identically) rejects the new command and persists nothing.
    pub fn add(&mut self, command: UriCommand) -> Result<(), StoreError> {
        if self.settings.commands.iter().any(|existing| existing.id == command.id) {
            return Err(StoreError::DuplicateName { name: command.name });
        }
        debug!(id = %command.id, "adding command");
        self.settings.commands.push(command);
        self.save()
    }

    /// Replace a stored command, matched by id
    pub fn update(&mut self, command: UriCommand) -> Result<(), StoreError> {
        let slot = self
            .settings
            .commands
            .iter_mut()
            .find(|existing| existing.id == command.id)
            .ok_or_else(|| StoreError::UnknownId {
                id: command.id.clone(),
            })?;
        *slot = command;
        self.save()
    }

    /// Remove a command by id, returning the removed record
    pub fn remove(&mut self, id: &str) -> Result<UriCommand, StoreError> {
        let index = self
            .settings
            .commands
            .iter()
            .position(|existing| existing.id == id)
            .ok_or_else(|| StoreError::UnknownId { id: id.to_string() })?;
        let removed = self.settings.commands.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Toggle the resolved-URI echo notice
    pub fn set_show_open_notice(&mut self, on: bool) -> Result<(), StoreError> {
        self.settings.show_open_notice = on;
        self.save()
    }

    /// Change the missing-metadata-field policy
    pub fn set_missing_field(&mut self, policy: MissingFieldPolicy) -> Result<(), StoreError> {
        self.settings.missing_field = policy;
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.settings)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CommandStore {
        CommandStore::load(dir.path().join("data.json")).unwrap()
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let temp = tempdir().unwrap();
        let store = store_in(&temp);
        assert!(store.commands().is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let temp = tempdir().unwrap();
        let mut store = store_in(&temp);

        store.add(UriCommand::new("Open Web", "https://x/{{selection}}")).unwrap();

        let command = store.get("open-web").unwrap();
        assert_eq!(command.name, "Open Web");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let temp = tempdir().unwrap();
        let mut store = store_in(&temp);

        store.add(UriCommand::new("Open", "a://")).unwrap();
        let err = store.add(UriCommand::new("open", "b://")).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateName { .. }));
        // The rejected command was not kept
        assert_eq!(store.commands().len(), 1);
        assert_eq!(store.get("open").unwrap().template, "a://");
    }

    #[test]
    fn test_update_replaces_record() {
        let temp = tempdir().unwrap();
        let mut store = store_in(&temp);
        store.add(UriCommand::new("Open", "a://")).unwrap();

        let mut edited = store.get("open").unwrap().clone();
        edited.template = "b://{{fileName}}".to_string();
        store.update(edited).unwrap();

        assert_eq!(store.get("open").unwrap().template, "b://{{fileName}}");
    }

    #[test]
    fn test_update_unknown_id() {
        let temp = tempdir().unwrap();
        let mut store = store_in(&temp);
        let err = store.update(UriCommand::new("Ghost", "x://")).unwrap_err();
        assert!(matches!(err, StoreError::UnknownId { .. }));
    }

    #[test]
    fn test_remove() {
        let temp = tempdir().unwrap();
        let mut store = store_in(&temp);
        store.add(UriCommand::new("Open", "a://")).unwrap();

        let removed = store.remove("open").unwrap();
        assert_eq!(removed.name, "Open");
        assert!(store.commands().is_empty());
        assert!(matches!(store.remove("open"), Err(StoreError::UnknownId { .. })));
    }

    #[test]
    fn test_reload_round_trips_records() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.json");

        {
            let mut store = CommandStore::load(&path).unwrap();
            store
                .add(UriCommand::new("Open Report", "myapp://t={{fileName}}").with_icon("star"))
                .unwrap();
            store.set_show_open_notice(true).unwrap();
            store.set_missing_field(MissingFieldPolicy::Empty).unwrap();
        }

        let reloaded = CommandStore::load(&path).unwrap();
        let command = reloaded.get("open-report").unwrap();
        assert_eq!(command.name, "Open Report");
        assert_eq!(command.template, "myapp://t={{fileName}}");
        assert_eq!(command.icon.as_deref(), Some("star"));
        assert!(command.encode);
        assert!(reloaded.settings().show_open_notice);
        assert_eq!(reloaded.settings().missing_field, MissingFieldPolicy::Empty);
    }

    #[test]
    fn test_order_preserved() {
        let temp = tempdir().unwrap();
        let mut store = store_in(&temp);
        store.add(UriCommand::new("B", "b://")).unwrap();
        store.add(UriCommand::new("A", "a://")).unwrap();

        let names: Vec<&str> = store.commands().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
