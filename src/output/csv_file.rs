use crate::project::{NarrativeSection, ProjectRecord, COLUMNS};
use crate::GalleryError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Separator placed between the entries of a list-valued cell
pub const LIST_SEPARATOR: &str = "\n";

/// One CSV row, every column as text
///
/// Absent values are empty strings. List columns hold their entries joined
/// by [`LIST_SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub title: String,
    pub headline: String,
    pub media: String,
    pub inspiration: String,
    pub what_it_does: String,
    pub how_we_built_it: String,
    pub challenges: String,
    pub accomplishments: String,
    pub lessons: String,
    pub whats_next: String,
    pub built_with: String,
    pub demos: String,
}

impl CsvRow {
    /// Splits a list-valued cell back into its entries
    ///
    /// Entries were written with their own line breaks replaced by spaces, so
    /// `"Py\nthon"` comes back as `"Py thon"`.
    pub fn list(cell: &str) -> Vec<String> {
        if cell.is_empty() {
            return Vec::new();
        }
        cell.split(LIST_SEPARATOR).map(str::to_string).collect()
    }

    /// Entries of the `media` column
    pub fn media_list(&self) -> Vec<String> {
        Self::list(&self.media)
    }

    /// Entries of the `built_with` column
    pub fn built_with_list(&self) -> Vec<String> {
        Self::list(&self.built_with)
    }

    /// Entries of the `demos` column
    pub fn demos_list(&self) -> Vec<String> {
        Self::list(&self.demos)
    }
}

impl From<&ProjectRecord> for CsvRow {
    fn from(record: &ProjectRecord) -> Self {
        let text = |section| {
            record
                .narrative
                .get(section)
                .map(str::to_string)
                .unwrap_or_default()
        };

        Self {
            title: record.title.clone(),
            headline: record.headline.clone(),
            media: join_list(record.media.as_deref()),
            inspiration: text(NarrativeSection::Inspiration),
            what_it_does: text(NarrativeSection::WhatItDoes),
            how_we_built_it: text(NarrativeSection::HowWeBuiltIt),
            challenges: text(NarrativeSection::Challenges),
            accomplishments: text(NarrativeSection::Accomplishments),
            lessons: text(NarrativeSection::Lessons),
            whats_next: text(NarrativeSection::WhatsNext),
            built_with: join_list(record.built_with.as_deref()),
            demos: join_list(record.demos.as_deref()),
        }
    }
}

/// Joins list entries into one cell. Line breaks inside an entry become
/// spaces so the cell splits back into the same number of entries.
fn join_list(entries: Option<&[String]>) -> String {
    entries
        .map(|entries| {
            entries
                .iter()
                .map(|entry| entry.replace(|c: char| c == '\r' || c == '\n', " "))
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR)
        })
        .unwrap_or_default()
}

/// Writes a batch of records to `path`, replacing any existing file
///
/// The header row is always written, even for an empty batch. Missing parent
/// directories are created.
///
/// # Arguments
///
/// * `path` - Destination CSV file
/// * `records` - The gallery's records, in listing order
///
/// # Returns
///
/// * `Ok(())` - Header and every record were written and flushed
/// * `Err(GalleryError)` - The file could not be created or written
pub fn write_records(path: &Path, records: &[ProjectRecord]) -> Result<(), GalleryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Reads a file written by [`write_records`]
pub fn read_rows(path: &Path) -> Result<Vec<CsvRow>, GalleryError> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<Result<Vec<CsvRow>, _>>()?;
    Ok(rows)
}
