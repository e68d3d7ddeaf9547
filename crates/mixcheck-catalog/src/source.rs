//! File-backed substance source

use crate::{decode_substances, CatalogError, DecodedCatalog};
use mixcheck_domain::traits::SubstanceSource;
use mixcheck_domain::Substance;
use std::path::{Path, PathBuf};

/// Substance feed stored in a JSON file
///
/// The file is read again on every load, so a refresh picks up whatever the
/// file holds at that moment.
///
/// # Examples
///
/// ```no_run
/// use mixcheck_catalog::FileSource;
/// use mixcheck_domain::traits::SubstanceSource;
///
/// let source = FileSource::new("substances.json");
/// let substances = source.load_substances().unwrap();
/// println!("{} substances", substances.len());
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the feed file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file, keeping categories and skip counts
    pub fn load(&self) -> Result<DecodedCatalog, CatalogError> {
        let json = std::fs::read_to_string(&self.path)?;
        let catalog = decode_substances(&json)?;

        tracing::info!(
            "Loaded {} substances from {} ({} entries skipped)",
            catalog.substances.len(),
            self.path.display(),
            catalog.skipped_substances
        );
        Ok(catalog)
    }
}

impl SubstanceSource for FileSource {
    type Error = CatalogError;

    fn load_substances(&self) -> Result<Vec<Substance>, Self::Error> {
        self.load().map(|catalog| catalog.substances)
    }
}
