// ABOUTME: Template renderer combining store lookup, marker stripping and substitution
// ABOUTME: Resolves placeholders against a closed parameter set, never evaluating code

use serde_json::Value;
use tracing::{debug, warn};

use super::error::{EvaluationError, Result};
use super::markers::Markers;
use super::params::{stringify, TemplateParams};
use super::tokenize::{tokenize, Placeholder, Segment};
use crate::store::TemplateStore;

/// Renders templates retrieved from a [`TemplateStore`]
#[derive(Debug, Clone)]
pub struct TemplateRenderer<S> {
    store: S,
    markers: Markers,
}

impl<S: TemplateStore> TemplateRenderer<S> {
    /// Create a renderer over `store` using the default markers
    pub fn new(store: S) -> Self {
        Self {
            store,
            markers: Markers::default(),
        }
    }

    /// Replace the marker pair stripped before rendering
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up `identifier`, strip the markers and substitute `params`
    pub fn render(&self, identifier: &str, params: &TemplateParams) -> Result<String> {
        debug!(
            "Rendering template '{}' with {} parameters",
            identifier,
            params.len()
        );

        let source = self.store.lookup(identifier)?;
        let output = self.render_str(&source, params).map_err(|e| {
            warn!("Template '{}' failed to render: {}", identifier, e);
            e
        })?;

        debug!("Rendered template '{}' ({} bytes)", identifier, output.len());
        Ok(output)
    }

    /// Strip the markers from `text` and substitute `params`
    pub fn render_str(&self, text: &str, params: &TemplateParams) -> Result<String> {
        let stripped = self.markers.strip(text);
        Ok(render(&stripped, params)?)
    }

    /// Distinct placeholder expressions of a stored template, in order of appearance
    pub fn placeholders(&self, identifier: &str) -> Result<Vec<String>> {
        let source = self.store.lookup(identifier)?;
        let segments = tokenize(&self.markers.strip(&source))?;

        let mut seen = Vec::new();
        for segment in segments {
            if let Segment::Placeholder(p) = segment {
                if !seen.contains(&p.expr) {
                    seen.push(p.expr);
                }
            }
        }
        Ok(seen)
    }
}

/// Substitute `params` into already stripped template text
pub fn render(text: &str, params: &TemplateParams) -> std::result::Result<String, EvaluationError> {
    params.validate_names()?;

    let segments = tokenize(text)?;
    let mut output = String::with_capacity(text.len());

    for segment in &segments {
        match segment {
            Segment::Text(t) => output.push_str(t),
            Segment::Placeholder(p) => output.push_str(&stringify(resolve(p, params)?)),
        }
    }

    Ok(output)
}

fn resolve<'a>(
    placeholder: &Placeholder,
    params: &'a TemplateParams,
) -> std::result::Result<&'a Value, EvaluationError> {
    let mut current = params
        .get(placeholder.root())
        .ok_or_else(|| EvaluationError::UndefinedName {
            name: placeholder.root().to_string(),
            line: placeholder.line,
        })?;

    for member in &placeholder.path[1..] {
        let next = match current {
            Value::Object(map) => map.get(member),
            Value::Array(items) => member.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };

        current = next.ok_or_else(|| EvaluationError::UndefinedMember {
            path: placeholder.expr.clone(),
            line: placeholder.line,
        })?;
    }

    Ok(current)
}
