// ABOUTME: Main library module for domtemplate
// ABOUTME: Exports template rendering, template stores and the CLI application

pub mod cli;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use store::{DirectoryStore, DocumentStore, LookupError, MemoryStore, TemplateStore};
pub use template::{EvaluationError, Markers, RenderError, TemplateParams, TemplateRenderer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
