// ABOUTME: In-memory template registry
// ABOUTME: Maps identifiers to template text supplied by the caller

use indexmap::IndexMap;

use super::{LookupError, TemplateStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    templates: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(identifier, text);
        self
    }

    pub fn insert(&mut self, identifier: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(identifier.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateStore for MemoryStore {
    fn lookup(&self, identifier: &str) -> Result<String, LookupError> {
        self.templates
            .get(identifier)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                identifier: identifier.to_string(),
            })
    }

    fn identifiers(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }
}
