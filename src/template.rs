//! Manifest template generation.
//!
//! Renders a complete, ready-to-save manifest document for a provider from
//! the [catalog](crate::catalog). Section layout is fixed: `specVersion`,
//! the integration header, `read`, `write`, an example `subscribe` block
//! for eligible providers, and a trailing `proxy`. Which sections appear
//! depends on the object selection; their internal ordering never changes.
//!
//! Generation never fails. Unknown providers fall back to a placeholder
//! template the author fills in by hand.

use std::fmt::Write as _;

use itertools::Itertools;

use crate::{
    catalog::{self, ProviderTemplate},
    config::Settings,
};

/// Render a manifest for `provider_id` with the given read-object selection.
///
/// Selected names that the catalog does not know for this provider are
/// ignored. An empty (or entirely unknown) selection produces a skeleton
/// with no `read`, `write` or `subscribe` section but a valid
/// `specVersion`/`integrations` frame and `proxy` block.
pub fn synthesize(provider_id: &str, selected_read_objects: &[String], settings: &Settings) -> String {
    match catalog::template(provider_id) {
        Some(template) => {
            let selected = selected_read_objects
                .iter()
                .map(String::as_str)
                .filter(|name| template.read_object_names().any(|known| known == *name))
                .collect_vec();
            render(template, &selected, settings)
        }
        None => generic_template(provider_id, settings),
    }
}

/// Render a manifest for `provider_id` selecting every catalogued object.
pub fn synthesize_complete(provider_id: &str, settings: &Settings) -> String {
    match catalog::template(provider_id) {
        Some(template) => {
            let selected = template.read_object_names().collect_vec();
            render(template, &selected, settings)
        }
        None => generic_template(provider_id, settings),
    }
}

fn render(template: &ProviderTemplate, selected: &[&str], settings: &Settings) -> String {
    let mut yaml = format!(
        "specVersion: 1.0.0\n\
         integrations:\n  \
         - name: {}\n    \
         displayName: {}\n    \
         provider: {}\n",
        template.name, template.display_name, template.id
    );

    if !selected.is_empty() {
        yaml.push_str("    read:\n      objects:\n");
        // Entries follow the caller's selection order, not catalog order.
        for object in selected.iter().filter_map(|name| {
            template
                .read_objects
                .iter()
                .find(|object| object.name == *name)
        }) {
            let _ = write!(
                yaml,
                "        - objectName: {}\n          \
                 destination: {}\n          \
                 schedule: \"{}\"{}\n          \
                 requiredFields:\n",
                object.name,
                settings.default_destination,
                settings.default_schedule,
                schedule_comment(&settings.default_schedule)
            );
            for field in object.fields {
                let _ = writeln!(yaml, "            - fieldName: {field}");
            }
            yaml.push_str(
                "          optionalFieldsAuto: all\n          \
                 backfill:\n            \
                 defaultPeriod:\n              \
                 fullHistory: true\n          \
                 delivery:\n            \
                 mode: auto # Options: auto, onRequest\n",
            );
        }
    }

    // Write entries are limited to objects that were also selected for
    // reading, in the catalog's write order.
    let write_selected = template
        .write_objects
        .iter()
        .copied()
        .filter(|name| selected.contains(name))
        .collect_vec();

    if !write_selected.is_empty() {
        yaml.push_str("    write:\n      objects:\n");
        for name in &write_selected {
            let _ = write!(
                yaml,
                "        - objectName: {name}\n          \
                 inheritMapping: true\n          \
                 valueDefaults:\n            \
                 allowAnyFields: true\n"
            );
        }
    }

    // One example subscribe object for eligible providers: the first
    // write-selected object, or failing that the first read selection.
    if settings.subscribe_eligible(template.id) {
        let candidate = write_selected.first().or(selected.first());
        if let Some(name) = candidate {
            let _ = write!(
                yaml,
                "    subscribe:\n      \
                 objects:\n        \
                 - objectName: {name}\n          \
                 destination: {}\n          \
                 inheritFieldsAndMapping: true\n          \
                 createEvent:\n            \
                 enabled: always\n          \
                 updateEvent:\n            \
                 enabled: always\n            \
                 watchFieldsAuto: all\n          \
                 deleteEvent:\n            \
                 enabled: always\n",
                settings.default_destination
            );
        }
    }

    yaml.push_str("    proxy:\n      enabled: true\n");

    yaml
}

/// A fill-in-the-blanks manifest for providers the catalog does not know.
fn generic_template(provider_id: &str, settings: &Settings) -> String {
    format!(
        "specVersion: 1.0.0\n\
         integrations:\n  \
         - name: {provider_id}-integration\n    \
         displayName: {} Integration\n    \
         provider: {provider_id}\n    \
         read:\n      \
         objects:\n        \
         - objectName: # Enter object name here\n          \
         destination: {}\n          \
         schedule: \"{}\"{}\n          \
         requiredFields:\n            \
         - fieldName: # Enter required field name\n          \
         optionalFieldsAuto: all\n          \
         backfill:\n            \
         defaultPeriod:\n              \
         fullHistory: true\n          \
         delivery:\n            \
         mode: auto\n    \
         write:\n      \
         objects:\n        \
         - objectName: # Enter object name here\n          \
         inheritMapping: true\n          \
         valueDefaults:\n            \
         allowAnyFields: true\n    \
         proxy:\n      \
         enabled: true\n",
        capitalize_first(provider_id),
        settings.default_destination,
        settings.default_schedule,
        schedule_comment(&settings.default_schedule)
    )
}

/// The stock schedule keeps its explanatory comment; a customized
/// schedule renders bare so the comment cannot contradict it.
fn schedule_comment(schedule: &str) -> &'static str {
    if schedule == "*/30 * * * *" {
        " # Every 30 minutes"
    } else {
        ""
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
