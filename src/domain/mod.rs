//! Domain types for urilauncher
//!
//! The persisted command record behind every registered host command, and
//! the id derivation the store enforces uniqueness over.

mod command;

pub use command::{UriCommand, derive_id};
