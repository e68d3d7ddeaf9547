//! Tolerant decoding of a whole feed document
//!
//! Every substance entry is decoded on its own. An entry that fails is logged
//! and counted, the rest of the document still decodes. Within an entry, a
//! route that fails only drops that route.

use crate::conversions::{category_from_wire, roa_from_wire, substance_from_wire};
use crate::wire::{WireCategory, WireRoa, WireSubstance};
use crate::CatalogError;
use mixcheck_domain::{Category, Roa, Substance};
use serde_json::Value;

/// Result of decoding one feed document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedCatalog {
    /// Substances that decoded, in feed order
    pub substances: Vec<Substance>,

    /// Search categories listed by the feed
    pub categories: Vec<Category>,

    /// Substance entries that could not be decoded
    pub skipped_substances: usize,

    /// Route entries dropped from otherwise valid substances
    pub skipped_routes: usize,

    /// Category entries that could not be decoded
    pub skipped_categories: usize,
}

impl DecodedCatalog {
    /// Generate a summary report
    pub fn summary(&self) -> String {
        format!(
            "Decoded {} substances and {} categories (skipped {} substances, {} routes, {} categories)",
            self.substances.len(),
            self.categories.len(),
            self.skipped_substances,
            self.skipped_routes,
            self.skipped_categories
        )
    }
}

/// Decode a feed document `{"substances": [...], "categories": [...]}`
///
/// # Errors
///
/// Fails only when the text is not JSON or the document has no
/// `substances` array. Malformed entries never fail the document.
///
/// # Examples
///
/// ```
/// use mixcheck_catalog::decode_substances;
///
/// let json = r#"{"substances": [
///     {"name": "Caffeine", "class": {"psychoactive": ["Stimulants"]}},
///     {"commonNames": ["no name here"]}
/// ]}"#;
///
/// let catalog = decode_substances(json).unwrap();
/// assert_eq!(catalog.substances.len(), 1);
/// assert_eq!(catalog.skipped_substances, 1);
/// ```
pub fn decode_substances(json: &str) -> Result<DecodedCatalog, CatalogError> {
    let mut document: Value = serde_json::from_str(json)?;
    let mut catalog = DecodedCatalog::default();

    let entries = match document.get_mut("substances").map(Value::take) {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(CatalogError::Format(
                "'substances' must be an array".to_string(),
            ))
        }
        None => return Err(CatalogError::Format("missing 'substances' array".to_string())),
    };

    for (position, entry) in entries.into_iter().enumerate() {
        match decode_substance(entry, &mut catalog.skipped_routes) {
            Ok(substance) => catalog.substances.push(substance),
            Err(e) => {
                tracing::warn!("Skipping substance entry {}: {}", position, e);
                catalog.skipped_substances += 1;
            }
        }
    }

    if let Some(Value::Array(entries)) = document.get_mut("categories").map(Value::take) {
        for (position, entry) in entries.into_iter().enumerate() {
            match decode_category(entry) {
                Ok(category) => catalog.categories.push(category),
                Err(e) => {
                    tracing::warn!("Skipping category entry {}: {}", position, e);
                    catalog.skipped_categories += 1;
                }
            }
        }
    }

    tracing::debug!("{}", catalog.summary());
    Ok(catalog)
}

fn decode_substance(entry: Value, skipped_routes: &mut usize) -> Result<Substance, CatalogError> {
    let mut wire: WireSubstance = serde_json::from_value(entry)?;

    let mut roas = Vec::with_capacity(wire.roas.len());
    for raw in std::mem::take(&mut wire.roas) {
        match decode_roa(raw) {
            Ok(roa) => roas.push(roa),
            Err(e) => {
                tracing::warn!("Skipping route of '{}': {}", wire.name.trim(), e);
                *skipped_routes += 1;
            }
        }
    }

    Ok(substance_from_wire(wire, roas)?)
}

fn decode_roa(raw: Value) -> Result<Roa, CatalogError> {
    let wire: WireRoa = serde_json::from_value(raw)?;
    Ok(roa_from_wire(wire)?)
}

fn decode_category(raw: Value) -> Result<Category, CatalogError> {
    let wire: WireCategory = serde_json::from_value(raw)?;
    Ok(category_from_wire(wire)?)
}
