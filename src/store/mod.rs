// ABOUTME: Template store module providing read-by-identifier access to raw markup
// ABOUTME: Exports the TemplateStore capability and its in-memory, document and directory backends

pub mod directory;
pub mod document;
pub mod error;
pub mod memory;

pub use directory::DirectoryStore;
pub use document::DocumentStore;
pub use error::{LookupError, StoreError};
pub use memory::MemoryStore;

/// Read-only source of raw template markup keyed by identifier
pub trait TemplateStore {
    /// Return the raw markup stored under `identifier`
    fn lookup(&self, identifier: &str) -> Result<String, LookupError>;

    /// Identifiers this store can resolve
    fn identifiers(&self) -> Vec<String>;
}

impl<T: TemplateStore + ?Sized> TemplateStore for Box<T> {
    fn lookup(&self, identifier: &str) -> Result<String, LookupError> {
        (**self).lookup(identifier)
    }

    fn identifiers(&self) -> Vec<String> {
        (**self).identifiers()
    }
}

impl<T: TemplateStore + ?Sized> TemplateStore for &T {
    fn lookup(&self, identifier: &str) -> Result<String, LookupError> {
        (**self).lookup(identifier)
    }

    fn identifiers(&self) -> Vec<String> {
        (**self).identifiers()
    }
}
