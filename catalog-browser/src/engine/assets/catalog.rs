use bevy::prelude::*;
use serde::Deserialize;

/// One raw dataset row as it comes out of the CSV loader.
///
/// Every column is optional; missing columns and empty cells both
/// deserialise to `None` so validation happens in one place.
#[derive(Asset, TypePath, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogRow {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Validated catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub artist: String,
    pub year: String,
    pub genre: String,
    pub label: String,
    pub image_url: String,
}

impl Record {
    /// Build a record from a raw row. Rows without a title or artist are
    /// not catalog items and yield `None`.
    pub fn from_row(row: &CatalogRow) -> Option<Self> {
        let title = non_empty(&row.title)?;
        let artist = non_empty(&row.artist)?;

        Some(Self {
            title,
            artist,
            year: non_empty(&row.year).unwrap_or_default(),
            genre: non_empty(&row.genre).unwrap_or_default(),
            label: non_empty(&row.label).unwrap_or_default(),
            image_url: non_empty(&row.image_url).unwrap_or_default(),
        })
    }

    /// Short human name used in log lines.
    pub fn display_name(&self) -> String {
        format!("'{}' by {}", self.title, self.artist)
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Keep the valid rows, preserving dataset order.
pub fn records_from_rows<'a>(rows: impl IntoIterator<Item = &'a CatalogRow>) -> Vec<Record> {
    rows.into_iter().filter_map(Record::from_row).collect()
}

/// Every valid record of the loaded dataset, in row order.
#[derive(Resource, Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<Record>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
