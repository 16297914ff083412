//! Command records and id derivation
//!
//! Every user-defined command persists as a [`UriCommand`]. The id is a slug
//! derived from the display name; two names that slug to the same id would
//! collide at the host, so the store rejects the second one at save time.

use serde::{Deserialize, Serialize};

/// A user-defined URI command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriCommand {
    /// Display name, unique among all commands
    pub name: String,

    /// Stable identifier derived from the name
    pub id: String,

    /// URI template with `{{...}}` placeholders
    pub template: String,

    /// Host icon name, if the user picked one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Percent-encode substituted values
    #[serde(default = "default_encode")]
    pub encode: bool,
}

fn default_encode() -> bool {
    true
}

impl UriCommand {
    /// Create a command with its id derived from the name
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        let name = name.into();
        let id = derive_id(&name);
        Self {
            name,
            id,
            template: template.into(),
            icon: None,
            encode: true,
        }
    }

    /// Attach a host icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Toggle percent-encoding of substituted values
    pub fn with_encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }
}

/// Derive a stable command id from a display name
///
/// Deterministic and one-way: lowercase, strip apostrophes, collapse any
/// other non-alphanumeric runs into single hyphens.
pub fn derive_id(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c == '\'' || c == '\u{2019}' || c == '\u{2018}' {
                None // straight and curly apostrophes vanish instead of hyphenating
            } else {
                Some('-')
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
