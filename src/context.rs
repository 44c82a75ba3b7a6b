//! Cursor context resolution for manifest documents.
//!
//! Given document text and a cursor position, works out what the token
//! under the cursor is and what role it plays: a manifest key, a provider
//! value, or something we cannot classify.
//!
//! Classification is line-local by design: the containing line's literal
//! text decides the role, no key-path is derived from the parse tree. A
//! path-aware resolver could disambiguate same-named keys at different
//! nesting depths (`name` under an integration vs. `name` under an object);
//! the line heuristic cannot. The external contract (token + role in,
//! documentation out) leaves room for such a resolver later.

use once_cell::sync::Lazy;
use regex::Regex;
use ropey::Rope;
use tower_lsp::lsp_types::Position;

/// Maximal alphanumeric/hyphen/underscore run, the manifest's word shape.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_-]+").unwrap());

/// What the token under the cursor is doing on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The token is a mapping key (`schedule:`, `backfill:`, ...).
    Key,
    /// The token is the value of a `provider:` entry.
    ProviderValue,
    /// The line could not be classified, or the document does not parse.
    Unknown,
}

/// The resolved context for one hover request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorContext {
    pub token: String,
    pub role: Role,
}

/// Resolve the token and role at `position` in `text`.
///
/// Returns `None` when no word touches the cursor (the caller should
/// suppress hover display). A document that fails to parse as YAML is not
/// an error here: the role degrades to [`Role::Unknown`] and the caller can
/// still do a plain token lookup, since documents mid-edit are invalid far
/// more often than not.
pub fn resolve(text: &str, position: Position) -> Option<CursorContext> {
    let rope = Rope::from_str(text);
    let line_text = rope.get_line(position.line as usize)?.to_string();

    let (_, word_end, token) = word_at(&line_text, position.character as usize)?;

    // A parse failure takes the whole document out of consideration; only
    // the extracted token is usable.
    if serde_yaml::from_str::<serde_yaml::Value>(text).is_err() {
        return Some(CursorContext {
            token,
            role: Role::Unknown,
        });
    }

    let role = if line_text.contains("provider:") && line_text.contains(&token) {
        Role::ProviderValue
    } else if line_text.find(':').is_some_and(|colon| colon >= word_end) {
        Role::Key
    } else {
        Role::Unknown
    };

    Some(CursorContext { token, role })
}

/// The word whose span contains or ends at `character` on `line_text`.
///
/// Returns `(start, end, word)` with a half-open column span. A cursor
/// sitting immediately after a word still counts as touching it.
fn word_at(line_text: &str, character: usize) -> Option<(usize, usize, String)> {
    WORD.find_iter(line_text)
        .find(|word| word.start() <= character && character <= word.end())
        .map(|word| (word.start(), word.end(), word.as_str().to_string()))
}
