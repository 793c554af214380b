//! Render context for template substitution.
//!
//! [`EntityData`] is the substitution context passed into template
//! rendering: the entity's lower-cased name, the base name of the resolved
//! output directory, and the generation timestamp. It is created fresh per
//! invocation, immutable once built, and discarded after rendering.
//!
//! ## Variables
//!
//! | Variable | Example | Source |
//! |----------|---------|--------|
//! | `NAME` | "checkout" | User input, lower-cased |
//! | `NAME_TITLE` | "Checkout" | Computed (title-case transform) |
//! | `NAME_UPPER` | "CHECKOUT" | Computed (upper-case transform) |
//! | `PACKAGE` | "orders" | Base name of the output directory |
//! | `PACKAGE_TITLE` | "Orders" | Computed |
//! | `PACKAGE_UPPER` | "ORDERS" | Computed |
//! | `TIMESTAMP` | "2026-08-07T12:00:00Z" | Generation time, RFC 3339 |
//!
//! The `*_TITLE` and `*_UPPER` variants are the two named helper transforms
//! available to template authors.

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};

use crate::domain::error::DomainError;

/// Substitution context for one generation run.
#[derive(Debug, Clone)]
pub struct EntityData {
    name: String,
    variables: HashMap<String, String>,
}

impl EntityData {
    /// Build a context with the timestamp taken from the system clock.
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Self::with_timestamp(name, package, timestamp)
    }

    /// Build a context with an explicit timestamp. Rendering is fully
    /// deterministic through this constructor, which is what tests use.
    pub fn with_timestamp(
        name: impl Into<String>,
        package: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let package = package.into();
        let mut vars = HashMap::new();

        // Standard variables - the contract between turbogen and its
        // templates. Any template using {{NAME}} can expect this to exist.
        vars.insert("NAME".to_string(), name.clone());
        vars.insert("NAME_TITLE".to_string(), to_title_case(&name));
        vars.insert("NAME_UPPER".to_string(), name.to_uppercase());
        vars.insert("PACKAGE".to_string(), package.clone());
        vars.insert("PACKAGE_TITLE".to_string(), to_title_case(&package));
        vars.insert("PACKAGE_UPPER".to_string(), package.to_uppercase());
        vars.insert("TIMESTAMP".to_string(), timestamp.into());

        Self {
            name,
            variables: vars,
        }
    }

    /// The entity's normalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Every placeholder must resolve: a `{{...}}` left in the output after
    /// substitution is a render error naming the offending placeholder.
    /// The built-in templates only reference supplied variables, so this
    /// fires for malformed or third-party template content.
    ///
    /// `resource` is the template's resource name, carried into the error
    /// for diagnostics.
    pub fn render(&self, template: &str, resource: &str) -> Result<String, DomainError> {
        let mut result = template.to_string();

        // Single-pass replacement. Order doesn't matter for independent
        // variables.
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        if let Some(placeholder) = first_placeholder(&result) {
            return Err(DomainError::UnresolvedPlaceholder {
                placeholder: placeholder.to_string(),
                resource: resource.to_string(),
            });
        }

        Ok(result)
    }
}

/// First `{{...}}` span remaining in `rendered`, if any.
fn first_placeholder(rendered: &str) -> Option<&str> {
    let start = rendered.find("{{")?;
    let rest = &rendered[start + 2..];
    let end = rest.find("}}")?;
    Some(&rest[..end])
}

/// Title-case transform: upper-cases any letter that starts a word, where
/// words are delimited by non-alphanumeric characters ("my-app" → "My-App").
/// Mirrors the behavior template authors expect from the `title` helper.
fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;

    for c in s.chars() {
        if c.is_alphanumeric() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }

    out
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> EntityData {
        EntityData::with_timestamp("checkout", "orders", "2026-08-07T12:00:00Z")
    }

    #[test]
    fn standard_variables_present() {
        let d = data();
        assert_eq!(d.get("NAME"), Some("checkout"));
        assert_eq!(d.get("NAME_TITLE"), Some("Checkout"));
        assert_eq!(d.get("NAME_UPPER"), Some("CHECKOUT"));
        assert_eq!(d.get("PACKAGE"), Some("orders"));
        assert_eq!(d.get("PACKAGE_TITLE"), Some("Orders"));
        assert_eq!(d.get("PACKAGE_UPPER"), Some("ORDERS"));
        assert_eq!(d.get("TIMESTAMP"), Some("2026-08-07T12:00:00Z"));
    }

    #[test]
    fn renders_every_occurrence() {
        let d = data();
        let out = d
            .render("export class {{NAME_TITLE}} {} // {{NAME_TITLE}}", "t.tmpl")
            .unwrap();
        assert_eq!(out, "export class Checkout {} // Checkout");
    }

    #[test]
    fn timestamp_from_clock_is_rfc3339() {
        let d = EntityData::new("checkout", "orders");
        let ts = d.get("TIMESTAMP").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "{ts}");
    }

    #[test]
    fn unresolved_placeholder_is_an_error() {
        let d = data();
        let err = d.render("hello {{NOPE}}", "broken.tmpl").unwrap_err();
        match err {
            DomainError::UnresolvedPlaceholder {
                placeholder,
                resource,
            } => {
                assert_eq!(placeholder, "NOPE");
                assert_eq!(resource, "broken.tmpl");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn template_without_placeholders_passes_through() {
        let d = data();
        assert_eq!(d.render("plain text", "t.tmpl").unwrap(), "plain text");
    }

    #[test]
    fn title_case_handles_separators() {
        assert_eq!(to_title_case("checkout"), "Checkout");
        assert_eq!(to_title_case("my-app"), "My-App");
        assert_eq!(to_title_case("my_app2"), "My_App2");
        assert_eq!(to_title_case(""), "");
    }
}
