// ABOUTME: Command implementations for the domtemplate CLI
// ABOUTME: Handles execution of render, list, and check commands against a template source

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use super::args::Args;
use super::config::Config;
use crate::store::{DirectoryStore, DocumentStore, TemplateStore};
use crate::template::{TemplateParams, TemplateRenderer};

/// Open a directory store or an HTML document store depending on `source`
pub async fn open_store(source: &Path) -> Result<Box<dyn TemplateStore + Send + Sync>> {
    if source.is_dir() {
        let store = DirectoryStore::open(source)
            .map_err(|e| anyhow::anyhow!("Failed to open template directory: {}", e))?;
        Ok(Box::new(store))
    } else {
        let store = DocumentStore::load(source)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load template document: {}", e))?;
        Ok(Box::new(store))
    }
}

/// Collect parameters: config vars, then the params file, then command line vars
pub async fn collect_params(
    vars: &[String],
    params_file: Option<&Path>,
    config: &Config,
) -> Result<TemplateParams> {
    let mut params = TemplateParams::from(config.template_vars.clone());

    if let Some(path) = params_file {
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            anyhow::anyhow!("Failed to read params file '{}': {}", path.display(), e)
        })?;
        let value: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid JSON in '{}': {}", path.display(), e))?;
        let file_params = TemplateParams::from_json(value).ok_or_else(|| {
            anyhow::anyhow!("Params file '{}' must contain a JSON object", path.display())
        })?;
        params.extend(file_params);
    }

    params.extend(TemplateParams::from(Args::parse_variables(vars)?));
    Ok(params)
}

/// Render a template and print it or write it to a file
pub async fn render_template(
    source: PathBuf,
    id: String,
    vars: Vec<String>,
    params_file: Option<PathBuf>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    info!("Rendering '{}' from {}", id, source.display());

    let params = collect_params(&vars, params_file.as_deref(), config).await?;
    info!("Collected {} template parameters", params.len());

    let store = open_store(&source).await?;
    let renderer = TemplateRenderer::new(store).with_markers(config.markers.clone());

    let rendered = renderer
        .render(&id, &params)
        .map_err(|e| anyhow::anyhow!("Failed to render '{}': {}", id, e))?;

    if let Some(output_path) = output {
        tokio::fs::write(&output_path, &rendered).await.map_err(|e| {
            anyhow::anyhow!(
                "Failed to write output file '{}': {}",
                output_path.display(),
                e
            )
        })?;
        info!("Output written to: {}", output_path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

/// List the identifiers of a template source
pub async fn list_templates(source: PathBuf, _config: &Config) -> Result<()> {
    info!("Listing templates in {}", source.display());

    let store = open_store(&source).await?;
    for identifier in store.identifiers() {
        println!("{}", identifier);
    }

    Ok(())
}

/// Validate a template's syntax and report its placeholders
pub async fn check_template(source: PathBuf, id: String, config: &Config) -> Result<()> {
    info!("Checking '{}' in {}", id, source.display());

    let store = open_store(&source).await?;
    let renderer = TemplateRenderer::new(store).with_markers(config.markers.clone());

    let placeholders = renderer
        .placeholders(&id)
        .map_err(|e| anyhow::anyhow!("Template check failed: {}", e))?;

    println!("✓ Template '{}' is valid", id);
    if placeholders.is_empty() {
        println!("  Placeholders: none");
    } else {
        println!("  Placeholders: {}", placeholders.join(", "));
    }

    Ok(())
}
