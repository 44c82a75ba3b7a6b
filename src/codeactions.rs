//! Quick fixes for manifest validation diagnostics.
//!
//! The validator lives elsewhere; this module only consumes its
//! diagnostics. Each diagnostic message is matched against a small rule
//! table, and matching rules produce a concrete insertion that resolves the
//! diagnostic. Unmatched diagnostics produce nothing: this is a convenience
//! layer, not a full auto-fixer.
//!
//! Repairs are advisory. Applying them is the editor's job; nothing here
//! mutates the document.

use std::collections::HashMap;

use ropey::Rope;
use tower_lsp::lsp_types::{
    CodeAction, CodeActionKind, Diagnostic, Position, Range, TextEdit, Url, WorkspaceEdit,
};

use crate::config::Settings;

/// A single suggested insertion resolving one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    /// Human-readable label shown in the quick-fix menu.
    pub title: String,
    /// Where the text is inserted.
    pub position: Position,
    /// Literal text to insert.
    pub new_text: String,
    /// Offer this repair as the default fix.
    pub is_preferred: bool,
}

/// Map validation diagnostics to repairs.
///
/// Pure over the diagnostic list; `text` contributes only the
/// end-of-document insertion point. Independent diagnostics yield
/// independent, non-overlapping repairs in input order.
pub fn compute_repairs(
    text: &str,
    diagnostics: &[Diagnostic],
    settings: &Settings,
) -> Vec<Repair> {
    if !settings.quick_fixes {
        return Vec::new();
    }

    diagnostics
        .iter()
        .flat_map(|diagnostic| {
            let mut repairs = Vec::new();

            if diagnostic.message.contains("specVersion") && diagnostic.message.contains("required")
            {
                repairs.push(Repair {
                    title: "Add specVersion: 1.0.0".to_string(),
                    position: Position {
                        line: 0,
                        character: 0,
                    },
                    new_text: "specVersion: 1.0.0\n".to_string(),
                    is_preferred: true,
                });
            }

            if diagnostic.message.contains("integrations")
                && diagnostic.message.contains("required")
            {
                repairs.push(Repair {
                    title: "Add basic integrations array".to_string(),
                    position: end_of_document(text),
                    new_text: "integrations:\n  - name: sample-integration\n    provider: sample\n"
                        .to_string(),
                    is_preferred: true,
                });
            }

            repairs
        })
        .collect()
}

/// Render a repair as an LSP quick-fix code action for `uri`.
pub fn to_code_action(uri: &Url, repair: &Repair) -> CodeAction {
    let edit = TextEdit {
        range: Range {
            start: repair.position,
            end: repair.position,
        },
        new_text: repair.new_text.clone(),
    };

    CodeAction {
        title: repair.title.clone(),
        kind: Some(CodeActionKind::QUICKFIX),
        edit: Some(WorkspaceEdit {
            changes: Some(HashMap::from([(uri.clone(), vec![edit])])),
            ..Default::default()
        }),
        is_preferred: Some(repair.is_preferred),
        ..Default::default()
    }
}

/// First column past the last line, or the document start when empty.
fn end_of_document(text: &str) -> Position {
    if text.is_empty() {
        return Position {
            line: 0,
            character: 0,
        };
    }

    Position {
        line: Rope::from_str(text).len_lines() as u32,
        character: 0,
    }
}
