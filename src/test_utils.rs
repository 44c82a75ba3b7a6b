//! Shared test utilities for manifest-ls.
//!
//! This module provides common helpers used across multiple test modules.
//! It is only compiled when running tests.

use tower_lsp::lsp_types::{Diagnostic, Position, Range};

/// Shorthand for an LSP position.
pub fn position(line: u32, character: u32) -> Position {
    Position { line, character }
}

/// A diagnostic with the given message and an empty range at the document
/// start. The repair engine only looks at the message text.
pub fn diagnostic(message: &str) -> Diagnostic {
    Diagnostic {
        range: Range {
            start: position(0, 0),
            end: position(0, 0),
        },
        message: message.to_string(),
        ..Default::default()
    }
}
