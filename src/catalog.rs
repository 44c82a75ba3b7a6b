//! The provider template catalog.
//!
//! A static inventory of well-known providers and the objects/fields the
//! template generator offers for them. Read objects are kept in declaration
//! order: the order drives both full-template generation and the choice of
//! the example subscribe object.
//!
//! The catalog deliberately does not enforce that `write_objects` is a
//! subset of the read object names; the two lists are maintained
//! independently per provider.

use once_cell::sync::Lazy;

/// An object offered for reading, together with its suggested fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadObject {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

/// Template data for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTemplate {
    /// Provider identifier as it appears in the manifest's `provider:` key.
    pub id: &'static str,
    /// Suggested integration name.
    pub name: &'static str,
    /// Suggested human-readable integration name.
    pub display_name: &'static str,
    /// Objects offered for reading, in template order.
    pub read_objects: &'static [ReadObject],
    /// Objects the provider accepts writes for.
    pub write_objects: &'static [&'static str],
}

static CATALOG: Lazy<Vec<ProviderTemplate>> = Lazy::new(|| {
    vec![
        ProviderTemplate {
            id: "salesforce",
            name: "salesforce-integration",
            display_name: "Salesforce Integration",
            read_objects: &[
                ReadObject {
                    name: "contact",
                    fields: &["FirstName", "LastName", "Email", "Phone"],
                },
                ReadObject {
                    name: "lead",
                    fields: &["FirstName", "LastName", "Email", "Company", "Status"],
                },
                ReadObject {
                    name: "account",
                    fields: &["Name", "Industry", "Website", "AnnualRevenue"],
                },
            ],
            write_objects: &["contact", "lead", "account"],
        },
        ProviderTemplate {
            id: "hubspot",
            name: "hubspot-integration",
            display_name: "HubSpot Integration",
            read_objects: &[
                ReadObject {
                    name: "contacts",
                    fields: &["firstname", "lastname", "email", "phone"],
                },
                ReadObject {
                    name: "companies",
                    fields: &["name", "domain", "industry", "phone"],
                },
                ReadObject {
                    name: "deals",
                    fields: &["dealname", "amount", "dealstage", "closedate"],
                },
            ],
            write_objects: &["contacts", "companies", "deals"],
        },
        ProviderTemplate {
            id: "github",
            name: "github-integration",
            display_name: "GitHub Integration",
            read_objects: &[
                ReadObject {
                    name: "repos",
                    fields: &["id", "name", "full_name", "private"],
                },
                ReadObject {
                    name: "issues",
                    fields: &["id", "number", "title", "state", "body"],
                },
                ReadObject {
                    name: "pulls",
                    fields: &["id", "number", "title", "state", "body"],
                },
            ],
            write_objects: &["issues", "pulls"],
        },
        ProviderTemplate {
            id: "intercom",
            name: "intercom-integration",
            display_name: "Intercom Integration",
            read_objects: &[
                ReadObject {
                    name: "contacts",
                    fields: &["id", "name", "email", "phone"],
                },
                ReadObject {
                    name: "companies",
                    fields: &["id", "name", "industry", "website"],
                },
                ReadObject {
                    name: "conversations",
                    fields: &["id", "title", "created_at", "updated_at"],
                },
            ],
            write_objects: &["contacts", "conversations"],
        },
        ProviderTemplate {
            id: "stripe",
            name: "stripe-integration",
            display_name: "Stripe Integration",
            read_objects: &[
                ReadObject {
                    name: "customers",
                    fields: &["id", "email", "name", "phone"],
                },
                ReadObject {
                    name: "products",
                    fields: &["id", "name", "description", "active"],
                },
                ReadObject {
                    name: "subscriptions",
                    fields: &["id", "customer", "status", "current_period_end"],
                },
            ],
            write_objects: &["customers", "products"],
        },
    ]
});

/// Look up a provider's template by identifier.
pub fn template(id: &str) -> Option<&'static ProviderTemplate> {
    CATALOG.iter().find(|template| template.id == id)
}

/// All catalogued provider identifiers, in catalog order.
pub fn provider_ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|template| template.id)
}

impl ProviderTemplate {
    /// Names of this provider's read objects, in template order.
    pub fn read_object_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.read_objects.iter().map(|object| object.name)
    }

    /// Whether the provider accepts writes for `object_name`.
    pub fn is_writable(&self, object_name: &str) -> bool {
        self.write_objects.contains(&object_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: The catalog knows the five stock providers, in order.
    #[test]
    fn test_catalog_providers() {
        let ids: Vec<_> = provider_ids().collect();
        assert_eq!(
            ids,
            vec!["salesforce", "hubspot", "github", "intercom", "stripe"]
        );
    }

    /// Test: Lookup by identifier finds the template with its objects.
    #[test]
    fn test_template_lookup() {
        let salesforce = template("salesforce").expect("salesforce should be catalogued");
        assert_eq!(salesforce.name, "salesforce-integration");
        assert_eq!(
            salesforce.read_object_names().collect::<Vec<_>>(),
            vec!["contact", "lead", "account"]
        );
        assert!(salesforce.is_writable("lead"));

        assert!(template("netsuite").is_none());
    }

    /// Test: Write capability is per the write list, not the read list.
    #[test]
    fn test_write_capability() {
        let github = template("github").expect("github should be catalogued");
        assert!(github.is_writable("issues"));
        // repos is readable but not writable
        assert!(!github.is_writable("repos"));
    }

    /// Test: Every read object carries at least one suggested field.
    #[test]
    fn test_read_objects_have_fields() {
        for id in provider_ids() {
            let template = template(id).unwrap();
            for object in template.read_objects {
                assert!(
                    !object.fields.is_empty(),
                    "Object '{}' of '{}' has no fields",
                    object.name,
                    id
                );
            }
        }
    }
}
