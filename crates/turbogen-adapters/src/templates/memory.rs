//! In-memory template provider for testing.

use std::collections::HashMap;

use turbogen_core::{
    application::{ApplicationError, ports::TemplateProvider},
    error::TurbogenResult,
};

/// HashMap-backed provider: tests register exactly the resources they need.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    resources: HashMap<String, String>,
}

impl MemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource, replacing any previous content under the name.
    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.resources.insert(name.into(), content.into());
        self
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl TemplateProvider for MemoryTemplates {
    fn read(&self, resource: &str) -> TurbogenResult<String> {
        self.resources.get(resource).cloned().ok_or_else(|| {
            ApplicationError::TemplateMissing {
                resource: resource.to_string(),
            }
            .into()
        })
    }
}
