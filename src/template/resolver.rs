//! Template resolver
//!
//! Substitutes every placeholder in a URI template against the live host
//! context, in a fixed order: metadata fields first, then file name, file
//! text, selection, current line, file path, vault name. Each kind rewrites
//! the working string before the next is evaluated; repeats of a kind are
//! replaced together. Resolution stops at the first failure - no partial URI
//! ever escapes.

use tracing::debug;

use crate::host::{ActiveFile, Editor, ResolutionContext};
use crate::settings::MissingFieldPolicy;

use super::error::ResolveError;
use super::token::{Placeholder, meta_fields};

/// Fixed-kind evaluation order; metadata fields always run first
const FIXED_ORDER: [Placeholder; 6] = [
    Placeholder::FileName,
    Placeholder::FileText,
    Placeholder::Selection,
    Placeholder::Line,
    Placeholder::FilePath,
    Placeholder::VaultName,
];

/// Resolve a template into a final URI string
///
/// `encode` percent-encodes every substituted value; when off, values are
/// inserted verbatim. `policy` governs metadata fields with no value and is
/// applied uniformly across the whole pass.
pub async fn resolve(
    template: &str,
    encode: bool,
    policy: MissingFieldPolicy,
    ctx: &ResolutionContext,
) -> Result<String, ResolveError> {
    let mut uri = template.to_string();

    let mut kinds: Vec<Placeholder> = meta_fields(&uri).into_iter().map(Placeholder::MetaField).collect();
    kinds.extend(FIXED_ORDER);

    for kind in kinds {
        let token = kind.token();
        // A kind already rewritten away (repeated metadata fields) skips here
        if !uri.contains(&token) {
            continue;
        }
        let value = lookup(&kind, policy, ctx).await?;
        let value = if encode {
            urlencoding::encode(&value).into_owned()
        } else {
            value
        };
        uri = uri.replace(&token, &value);
    }

    debug!(template, %uri, "template resolved");
    Ok(uri)
}

/// Extract the runtime value for one placeholder kind
async fn lookup(
    kind: &Placeholder,
    policy: MissingFieldPolicy,
    ctx: &ResolutionContext,
) -> Result<String, ResolveError> {
    match kind {
        Placeholder::FileName => Ok(require_file(ctx, kind)?.basename().to_string()),
        Placeholder::FileText => {
            let file = require_file(ctx, kind)?;
            if !file.is_markdown() {
                return Err(ResolveError::UnsupportedFileType { token: kind.token() });
            }
            Ok(file.read_text().await?)
        }
        Placeholder::Selection => Ok(require_editor(ctx, kind)?.selection()),
        Placeholder::Line => Ok(require_editor(ctx, kind)?.current_line()),
        Placeholder::FilePath => Ok(require_file(ctx, kind)?.path().to_string()),
        Placeholder::VaultName => Ok(ctx.vault_name().to_string()),
        Placeholder::MetaField(field) => {
            let source = ctx.metadata().ok_or(ResolveError::MissingCapability)?;
            let file = require_file(ctx, kind)?;
            match source.field(file.path(), field).await {
                Some(value) => Ok(value),
                None => match policy {
                    MissingFieldPolicy::Empty => Ok(String::new()),
                    MissingFieldPolicy::Fail => Err(ResolveError::MissingField { field: field.clone() }),
                },
            }
        }
    }
}

fn require_file<'a>(ctx: &'a ResolutionContext, kind: &Placeholder) -> Result<&'a dyn ActiveFile, ResolveError> {
    ctx.file().ok_or_else(|| ResolveError::MissingContext {
        token: kind.token(),
        needs: "an open file",
    })
}

fn require_editor<'a>(ctx: &'a ResolutionContext, kind: &Placeholder) -> Result<&'a dyn Editor, ResolveError> {
    ctx.editor().ok_or_else(|| ResolveError::MissingContext {
        token: kind.token(),
        needs: "an active editor",
    })
}
