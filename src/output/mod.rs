//! Output module for writing crawled projects
//!
//! This module handles:
//! - Deriving the per-gallery output file name
//! - Writing project records as CSV
//! - Reading a written file back as plain rows

mod csv_file;

pub use csv_file::{read_rows, write_records, CsvRow, LIST_SEPARATOR};

use crate::url::output_stem;
use crate::GalleryError;
use std::path::{Path, PathBuf};

/// Returns the CSV path for a gallery: `<directory>/<host stem>.csv`
///
/// # Example
///
/// ```
/// use devpost_gallery::output::output_path;
/// use std::path::Path;
///
/// let path = output_path(Path::new("out"), "https://deishacks2021.devpost.com/project-gallery").unwrap();
/// assert_eq!(path, Path::new("out/deishacks2021.csv"));
/// ```
pub fn output_path(directory: &Path, gallery_source: &str) -> Result<PathBuf, GalleryError> {
    let stem = output_stem(gallery_source)?;
    Ok(directory.join(format!("{}.csv", stem)))
}
