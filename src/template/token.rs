//! Placeholder registry
//!
//! The fixed set of recognized tokens plus the parametrized `{{meta:FIELD}}`
//! pattern. Tokens do not nest and occurrences are matched independently; a
//! template may repeat the metadata pattern with different field names.

use std::sync::OnceLock;

use regex::Regex;

/// Active file base name, no path and no extension
pub const FILE_NAME: &str = "{{fileName}}";
/// Active file full text (markdown files only)
pub const FILE_TEXT: &str = "{{fileText}}";
/// Editor text selection
pub const SELECTION: &str = "{{selection}}";
/// Text of the line under the editor cursor
pub const LINE: &str = "{{line}}";
/// Active file path within the vault
pub const FILE_PATH: &str = "{{filePath}}";
/// Workspace name
pub const VAULT_NAME: &str = "{{vaultName}}";

fn meta_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{meta:([^}]+)\}\}").expect("meta token pattern is valid"))
}

/// A recognized placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    FileName,
    FileText,
    Selection,
    Line,
    FilePath,
    VaultName,
    /// `{{meta:FIELD}}` with the extracted field name
    MetaField(String),
}

impl Placeholder {
    /// The token text as it appears in templates
    pub fn token(&self) -> String {
        match self {
            Self::FileName => FILE_NAME.to_string(),
            Self::FileText => FILE_TEXT.to_string(),
            Self::Selection => SELECTION.to_string(),
            Self::Line => LINE.to_string(),
            Self::FilePath => FILE_PATH.to_string(),
            Self::VaultName => VAULT_NAME.to_string(),
            Self::MetaField(field) => format!("{{{{meta:{field}}}}}"),
        }
    }
}

/// Metadata field names referenced by a template, in order of appearance
pub fn meta_fields(template: &str) -> Vec<String> {
    meta_pattern()
        .captures_iter(template)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Placeholders a template contains
///
/// Fixed kinds appear once each no matter how often they repeat; metadata
/// fields appear once per occurrence, carrying their field names.
pub fn scan(template: &str) -> Vec<Placeholder> {
    let fixed = [
        Placeholder::FileName,
        Placeholder::FileText,
        Placeholder::Selection,
        Placeholder::Line,
        Placeholder::FilePath,
        Placeholder::VaultName,
    ];

    let mut found: Vec<Placeholder> = fixed
        .into_iter()
        .filter(|kind| template.contains(&kind.token()))
        .collect();
    found.extend(meta_fields(template).into_iter().map(Placeholder::MetaField));
    found
}
