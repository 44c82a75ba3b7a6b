//! Hover provider for integration manifest documents.
//!
//! This module implements the LSP `textDocument/hover` capability,
//! showing documentation for the manifest element under the cursor.
//!
//! # Hover Targets
//!
//! | Target | Shows |
//! |--------|-------|
//! | Manifest key (`schedule:`, `backfill:`, ...) | Key documentation |
//! | Provider value (`provider: salesforce`) | Provider overview |
//! | Any other documented token | Key documentation |
//!
//! # Configuration
//!
//! Hover can be disabled via [`Settings::hover`]:
//!
//! ```json
//! { "hover": false }
//! ```

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::{
    config::Settings,
    context::{self, Role},
    docs,
};

/// Generate hover content for the element at the cursor position.
///
/// Resolves the token under the cursor and looks it up in the provider
/// table (for `provider:` values) or the key documentation table (for
/// everything else).
///
/// # Returns
///
/// `Some(Hover)` with markdown content, or `None` if:
/// - Hover is disabled in settings
/// - No token touches the cursor
/// - The token has no documentation entry
pub fn hover(text: &str, position: Position, settings: &Settings) -> Option<Hover> {
    if !settings.hover {
        return None;
    }

    let context = context::resolve(text, position)?;

    let documentation = match context.role {
        Role::ProviderValue => docs::provider_doc(&context.token),
        Role::Key | Role::Unknown => docs::key_doc(&context.token),
    }?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: documentation.to_string(),
        }),
        range: None,
    })
}
