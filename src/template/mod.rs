// ABOUTME: Template module for rendering comment-wrapped markup
// ABOUTME: Provides marker stripping, placeholder tokenization and parameter substitution

pub mod engine;
pub mod error;
pub mod markers;
pub mod params;
pub mod tokenize;

pub use engine::{render, TemplateRenderer};
pub use error::{EvaluationError, RenderError, Result};
pub use markers::Markers;
pub use params::TemplateParams;
