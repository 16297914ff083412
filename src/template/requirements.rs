//! Requirement classifier
//!
//! Maps a template to the host context it needs. The dispatcher recomputes
//! this on every availability check - editor and file context change between
//! checks, so nothing here is cached.

use crate::host::ResolutionContext;

use super::token::{Placeholder, scan};

/// Context a template needs before it can safely resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    /// A focused editor (`{{selection}}`, `{{line}}`)
    pub editor: bool,
    /// An active file (`{{fileName}}`, `{{fileText}}`, `{{filePath}}`, metadata fields)
    pub active_file: bool,
    /// The active file must be markdown (`{{fileText}}`)
    pub markdown_file: bool,
    /// The metadata capability (`{{meta:...}}`)
    pub metadata: bool,
}

/// Classify a template by the placeholders it contains
pub fn classify(template: &str) -> Requirements {
    let mut needs = Requirements::default();
    for placeholder in scan(template) {
        match placeholder {
            Placeholder::Selection | Placeholder::Line => needs.editor = true,
            Placeholder::FileName | Placeholder::FilePath => needs.active_file = true,
            Placeholder::FileText => {
                needs.active_file = true;
                needs.markdown_file = true;
            }
            Placeholder::MetaField(_) => {
                needs.active_file = true;
                needs.metadata = true;
            }
            Placeholder::VaultName => {}
        }
    }
    needs
}

impl Requirements {
    /// Whether the given invocation context meets these requirements
    pub fn satisfied_by(&self, ctx: &ResolutionContext) -> bool {
        if self.editor && ctx.editor().is_none() {
            return false;
        }
        if self.active_file && ctx.file().is_none() {
            return false;
        }
        if self.markdown_file && !ctx.file().is_some_and(|file| file.is_markdown()) {
            return false;
        }
        if self.metadata && ctx.metadata().is_none() {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_needs_editor() {
        let needs = classify("myapp://sel={{selection}}");
        assert!(needs.editor);
        assert!(!needs.active_file);
    }

    #[test]
    fn test_line_needs_editor() {
        assert!(classify("x://{{line}}").editor);
    }

    #[test]
    fn test_file_tokens_need_active_file() {
        assert!(classify("x://{{fileName}}").active_file);
        assert!(classify("x://{{filePath}}").active_file);
        assert!(!classify("x://{{fileName}}").markdown_file);
    }

    #[test]
    fn test_file_text_needs_markdown() {
        let needs = classify("x://{{fileText}}");
        assert!(needs.active_file);
        assert!(needs.markdown_file);
    }

    #[test]
    fn test_meta_needs_capability_and_file() {
        let needs = classify("x://{{meta:author}}");
        assert!(needs.metadata);
        assert!(needs.active_file);
        assert!(!needs.editor);
    }

    #[test]
    fn test_vault_name_needs_nothing() {
        assert_eq!(classify("x://{{vaultName}}"), Requirements::default());
    }

    #[test]
    fn test_satisfied_by_bare_context() {
        let ctx = ResolutionContext::new("Vault");
        assert!(classify("x://{{vaultName}}").satisfied_by(&ctx));
        assert!(!classify("x://{{selection}}").satisfied_by(&ctx));
        assert!(!classify("x://{{fileName}}").satisfied_by(&ctx));
        assert!(!classify("x://{{meta:a}}").satisfied_by(&ctx));
    }
}
