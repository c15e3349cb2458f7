use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only access to the catalog file
///
/// `.json` files are parsed as JSON (the exporter's compact payload or a
/// document); anything else is parsed as a TOML document.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Get the catalog file path
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<Catalog> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read catalog {}", self.file_path.display()))?;

        let catalog: Catalog = if self.is_json() {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid catalog {}", self.file_path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Invalid catalog {}", self.file_path.display()))?
        };

        tracing::info!(
            path = %self.file_path.display(),
            tasks = catalog.task_count(),
            contexts = catalog.contexts().len(),
            people = catalog.people().len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn is_json(&self) -> bool {
        self.file_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}
