//! Catalog loader
//!
//! Reads the item catalog from a JSON data file. The source data comes from
//! a spreadsheet export, so the loader is deliberately lenient: rows with
//! missing or non-numeric weight/volume fields coerce those fields to 0
//! instead of failing the whole load. Only file-level problems (unreadable
//! file, malformed JSON) surface as errors.

use super::item::Item;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One raw catalog row as it appears in the data file
///
/// Field layout follows the spreadsheet columns:
/// localized name, name, weight, volume, description.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    localized_name: String,

    #[serde(default)]
    name: String,

    #[serde(default, deserialize_with = "lenient_dimension")]
    weight: f32,

    #[serde(default, deserialize_with = "lenient_dimension")]
    volume: f32,

    #[serde(default)]
    description: String,
}

/// Error types for catalog loading
#[derive(Debug)]
pub enum CatalogError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::IoError(e) => write!(f, "IO error: {}", e),
            CatalogError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::IoError(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseError(err)
    }
}

/// Loads the item catalog from a JSON file
///
/// Returns the items in file order with 1-based ids assigned from row
/// position. On failure the caller is expected to fall back to an empty
/// catalog rather than abort the session.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Item>, CatalogError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let items = parse_catalog(&contents)?;

    println!("Catalog loaded: {} items", items.len());

    Ok(items)
}

/// Parses catalog JSON into items
fn parse_catalog(json: &str) -> Result<Vec<Item>, CatalogError> {
    let rows: Vec<CatalogRow> = serde_json::from_str(json)?;

    let items = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| Item {
            id: index as u32 + 1, // Ids are 1-based, matching row order
            image_ref: Item::derive_image_ref(&row.name),
            name: row.name,
            localized_name: row.localized_name,
            weight: row.weight,
            volume: row.volume,
            description: row.description,
        })
        .collect();

    Ok(items)
}

/// Deserializes a weight/volume field, coercing junk to 0
///
/// Accepts a JSON number, a numeric string, or null. Anything that does not
/// yield a finite non-negative number becomes 0.0, upholding the Item
/// invariant that dimensions are never NaN or negative.
fn lenient_dimension<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_dimension(&value))
}

fn coerce_dimension(value: &Value) -> f32 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0) as f32,
        Value::String(s) => s.trim().parse::<f32>().unwrap_or(0.0),
        _ => 0.0,
    };

    if number.is_finite() && number > 0.0 {
        number
    } else {
        0.0
    }
}
