// ABOUTME: Directory backed template store mapping file paths to identifiers
// ABOUTME: Indexes template files with walkdir and reads them on lookup

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::error::{Result, StoreError};
use super::{LookupError, TemplateStore};

/// Static file map rooted at a directory.
///
/// `greeting.html` is served as `greeting`, `mail/welcome.html` as
/// `mail/welcome`. Hidden files are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    files: BTreeMap<String, PathBuf>,
}

impl DirectoryStore {
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(StoreError::DirectoryNotFound(root));
        }

        let mut files = BTreeMap::new();
        let walker = WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(identifier) = identifier_for(&root, entry.path()) else {
                continue;
            };

            if files.contains_key(&identifier) {
                debug!(
                    "Skipping {} - identifier '{}' already taken",
                    entry.path().display(),
                    identifier
                );
                continue;
            }
            files.insert(identifier, entry.into_path());
        }

        info!("Indexed {} templates under {}", files.len(), root.display());
        Ok(Self { root, files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, identifier: &str) -> Option<&Path> {
        self.files.get(identifier).map(PathBuf::as_path)
    }
}

impl TemplateStore for DirectoryStore {
    fn lookup(&self, identifier: &str) -> std::result::Result<String, LookupError> {
        let path = self
            .files
            .get(identifier)
            .ok_or_else(|| LookupError::NotFound {
                identifier: identifier.to_string(),
            })?;

        std::fs::read_to_string(path).map_err(|source| LookupError::Io {
            identifier: identifier.to_string(),
            source,
        })
    }

    fn identifiers(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|s| s.starts_with('.')).unwrap_or(false)
}

fn identifier_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}
