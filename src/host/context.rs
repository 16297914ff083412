//! ResolutionContext - per-invocation host context

use std::sync::Arc;

use super::{ActiveFile, Editor, MetadataSource};

/// Host context assembled for a single command invocation
///
/// Built fresh on every availability check and every run, since the active
/// file and editor change between checks. Never persisted and never cached.
#[derive(Clone)]
pub struct ResolutionContext {
    vault_name: String,
    file: Option<Arc<dyn ActiveFile>>,
    editor: Option<Arc<dyn Editor>>,
    metadata: Option<Arc<dyn MetadataSource>>,
}

impl ResolutionContext {
    /// Create a context with only the workspace name available
    pub fn new(vault_name: impl Into<String>) -> Self {
        Self {
            vault_name: vault_name.into(),
            file: None,
            editor: None,
            metadata: None,
        }
    }

    /// Attach the active file handle
    pub fn with_file(mut self, file: Arc<dyn ActiveFile>) -> Self {
        self.file = Some(file);
        self
    }

    /// Attach the focused editor handle
    pub fn with_editor(mut self, editor: Arc<dyn Editor>) -> Self {
        self.editor = Some(editor);
        self
    }

    /// Attach the metadata capability
    pub fn with_metadata(mut self, metadata: Arc<dyn MetadataSource>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Workspace name; always present
    pub fn vault_name(&self) -> &str {
        &self.vault_name
    }

    /// Active file, if one is focused
    pub fn file(&self) -> Option<&dyn ActiveFile> {
        self.file.as_deref()
    }

    /// Focused editor, if any
    pub fn editor(&self) -> Option<&dyn Editor> {
        self.editor.as_deref()
    }

    /// Metadata capability, if the providing plugin is installed
    pub fn metadata(&self) -> Option<&dyn MetadataSource> {
        self.metadata.as_deref()
    }
}

impl std::fmt::Debug for ResolutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("vault_name", &self.vault_name)
            .field("file", &self.file.as_deref().map(|file| file.path().to_string()))
            .field("editor", &self.editor.is_some())
            .field("metadata", &self.metadata.is_some())
            .finish()
    }
}
