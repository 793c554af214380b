//! Bundled template resources.
//!
//! The template set ships inside the binary via `include_str!`, so the
//! provider needs no filesystem access and works from any install
//! location. Resources are addressed by the same relative paths they have
//! under `templates/` in this crate.

use tracing::debug;

use turbogen_core::{
    application::{ApplicationError, ports::TemplateProvider},
    error::TurbogenResult,
};

/// One bundled resource: resource path and compile-time content.
struct Resource {
    name: &'static str,
    content: &'static str,
}

macro_rules! resource {
    ($name:literal) => {
        Resource {
            name: $name,
            content: include_str!(concat!("../../templates/", $name)),
        }
    };
}

/// Every template shipped with turbogen.
///
/// The single-entity templates come first, then the fixed application set.
static RESOURCES: [Resource; 12] = [
    resource!("controller.tmpl"),
    resource!("service.tmpl"),
    resource!("middleware.tmpl"),
    resource!("package.tmpl"),
    resource!("app/src/routes/v1/router.ts.tmpl"),
    resource!("app/src/index.ts.tmpl"),
    resource!("app/Dockerfile.tmpl"),
    resource!("app/eslint.config.js.tmpl"),
    resource!("app/package.json.tmpl"),
    resource!("app/sonar-project.properties.tmpl"),
    resource!("app/tsconfig.json.tmpl"),
    resource!("app/vitest.config.ts.tmpl"),
];

/// Read-only provider over the compile-time bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Names of all bundled resources (testing/diagnostics helper).
    pub fn resource_names() -> impl Iterator<Item = &'static str> {
        RESOURCES.iter().map(|r| r.name)
    }
}

impl TemplateProvider for BuiltinTemplates {
    fn read(&self, resource: &str) -> TurbogenResult<String> {
        let found = RESOURCES.iter().find(|r| r.name == resource);

        match found {
            Some(r) => {
                debug!(resource, bytes = r.content.len(), "template read");
                Ok(r.content.to_string())
            }
            None => Err(ApplicationError::TemplateMissing {
                resource: resource.to_string(),
            }
            .into()),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use turbogen_core::domain::{ENTITY_KINDS, EntityData, template_entries};

    #[test]
    fn every_spec_entry_resolves_to_a_bundled_resource() {
        let provider = BuiltinTemplates::new();
        for info in &ENTITY_KINDS {
            for entry in template_entries(info.kind, "sample") {
                assert!(
                    provider.read(&entry.resource).is_ok(),
                    "missing resource: {}",
                    entry.resource
                );
            }
        }
    }

    #[test]
    fn bundled_templates_are_non_empty() {
        let provider = BuiltinTemplates::new();
        for name in BuiltinTemplates::resource_names() {
            let content = provider.read(name).unwrap();
            assert!(!content.trim().is_empty(), "empty resource: {name}");
        }
    }

    #[test]
    fn bundled_templates_render_without_leftover_placeholders() {
        // Every placeholder in every bundled template must be one the
        // standard context supplies.
        let provider = BuiltinTemplates::new();
        let data = EntityData::with_timestamp("sample", "apps", "2026-08-07T00:00:00Z");

        for name in BuiltinTemplates::resource_names() {
            let raw = provider.read(name).unwrap();
            let rendered = data.render(&raw, name).unwrap();
            assert!(!rendered.contains("{{"), "unrendered placeholder in {name}");
            assert!(rendered.contains("sample") || !raw.contains("{{NAME}}"));
        }
    }

    #[test]
    fn unknown_resource_is_a_template_error() {
        let provider = BuiltinTemplates::new();
        let err = provider.read("nonexistent.tmpl").unwrap_err();
        assert!(err.to_string().contains("nonexistent.tmpl"));
    }
}
