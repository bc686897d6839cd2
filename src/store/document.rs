// ABOUTME: HTML document backed template store
// ABOUTME: Resolves identifiers to the inner markup of the element carrying that id attribute

use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use indexmap::IndexMap;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use super::error::{Result, StoreError};
use super::{LookupError, TemplateStore};

/// Element registry of a parsed HTML document.
///
/// Inner markup is serialized once at parse time; the first element with a
/// given id wins, the same way `getElementById` resolves duplicates.
/// `<template>` elements expose their template contents, while ids nested
/// inside those contents are not indexed.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    source: Option<PathBuf>,
    elements: IndexMap<String, String>,
}

impl DocumentStore {
    /// Parse an HTML document from a string
    pub fn parse(html: &str) -> Result<Self> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        let mut elements = IndexMap::new();
        collect_elements(&dom.document, &mut elements)?;

        debug!("Indexed {} elements with an id", elements.len());

        Ok(Self {
            source: None,
            elements,
        })
    }

    /// Read and parse an HTML document from disk
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let html = fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let mut store = Self::parse(&html)?;
        store.source = Some(path.to_path_buf());

        info!(
            "Loaded {} templates from {}",
            store.elements.len(),
            path.display()
        );
        Ok(store)
    }

    /// Path the document was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl TemplateStore for DocumentStore {
    fn lookup(&self, identifier: &str) -> std::result::Result<String, LookupError> {
        self.elements
            .get(identifier)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                identifier: identifier.to_string(),
            })
    }

    fn identifiers(&self) -> Vec<String> {
        self.elements.keys().cloned().collect()
    }
}

fn collect_elements(handle: &Handle, elements: &mut IndexMap<String, String>) -> Result<()> {
    if let NodeData::Element {
        attrs,
        template_contents,
        ..
    } = &handle.data
    {
        let id = attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == "id")
            .map(|attr| attr.value.to_string());

        let contents = template_contents.borrow().clone();

        if let Some(id) = id {
            if elements.contains_key(&id) {
                debug!("Ignoring duplicate element id '{}'", id);
            } else {
                let inner_root = contents.as_ref().unwrap_or(handle);
                elements.insert(id, inner_html(inner_root)?);
            }
        }

        // Template contents form a separate fragment; ids inside are not resolvable
        if contents.is_some() {
            return Ok(());
        }
    }

    for child in handle.children.borrow().iter() {
        collect_elements(child, elements)?;
    }

    Ok(())
}

fn inner_html(handle: &Handle) -> Result<String> {
    let mut bytes = Vec::new();
    let serializable: SerializableHandle = handle.clone().into();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };

    serialize(&mut bytes, &serializable, opts).map_err(|e| StoreError::Parse(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StoreError::Parse(e.to_string()))
}
