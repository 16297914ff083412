//! Plugin settings document
//!
//! Serialized as JSON under the host's plugin-data discipline. All fields
//! default so a partial or missing document loads cleanly.

use serde::{Deserialize, Serialize};

use crate::domain::UriCommand;

/// Policy for metadata fields absent from the active file
///
/// Deployments want both behaviors, so it is a setting. Whichever is chosen
/// applies uniformly to every metadata occurrence in a single resolution
/// pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingFieldPolicy {
    /// Abort resolution and name the missing field to the user
    #[default]
    Fail,
    /// Substitute an empty string
    Empty,
}

/// Persisted plugin settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// User-defined commands, in creation order
    pub commands: Vec<UriCommand>,

    /// Echo the resolved URI as a notice before opening it
    #[serde(rename = "show-open-notice")]
    pub show_open_notice: bool,

    /// What to do when a metadata field has no value
    #[serde(rename = "missing-field")]
    pub missing_field: MissingFieldPolicy,
}
