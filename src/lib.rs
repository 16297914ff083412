//! urilauncher - user-defined URI commands for host workspaces
//!
//! The core of a host-application plugin: users define commands whose URI
//! templates carry placeholders for the active file, editor state, vault
//! name, and metadata fields. At invocation time the template resolves
//! against the live host context and the resulting URI opens with the
//! platform handler.
//!
//! The host itself stays behind traits ([`host`]), so the whole core runs
//! and tests without one.
//!
//! # Modules
//!
//! - [`domain`] - the persisted command record and id derivation
//! - [`settings`] - the settings document
//! - [`host`] - host boundary traits and the per-invocation context
//! - [`template`] - placeholder registry, requirement classifier, resolver
//! - [`commands`] - command store and host dispatch
//! - [`plugin`] - the facade a host adapter drives

pub mod commands;
pub mod domain;
pub mod host;
pub mod plugin;
pub mod settings;
pub mod template;

// Re-export commonly used types
pub use commands::{CommandDispatcher, CommandError, CommandRegistrar, CommandStore, HostCommand, StoreError};
pub use domain::{UriCommand, derive_id};
pub use host::{
    ActiveFile, Editor, LogNotifier, MetadataSource, Notifier, ResolutionContext, SystemUriOpener, UriOpener,
};
pub use plugin::UriLauncher;
pub use settings::{MissingFieldPolicy, Settings};
pub use template::{Placeholder, Requirements, ResolveError, classify, resolve};
