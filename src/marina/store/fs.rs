use super::{CatalogDocument, CatalogStore};
use crate::error::{MarinaError, Result};
use crate::model::{BoatType, Location, Product};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog backed by a JSON export file.
///
/// The file is read on every call; [`crate::catalog::Catalog`] makes sure that
/// happens once per list per session.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<CatalogDocument> {
        if !self.path.exists() {
            return Err(MarinaError::Store(format!(
                "Catalog file not found: {}",
                self.path.display()
            )));
        }
        debug!(path = %self.path.display(), "reading catalog export");
        let content = fs::read_to_string(&self.path)?;
        let document: CatalogDocument = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Write a full catalog export, creating parent directories as needed.
    pub fn write_document(&self, document: &CatalogDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl CatalogStore for FileCatalog {
    fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.read_document()?.products)
    }

    fn list_locations(&self) -> Result<Vec<Location>> {
        Ok(self.read_document()?.locations)
    }

    fn list_boat_types(&self) -> Result<Vec<BoatType>> {
        Ok(self.read_document()?.boat_types)
    }
}
