//! Question banks stored as a directory of CSV files.
//!
//! Each `*.csv` file is one collection named after its file stem, loaded in
//! file-name order. Files named `lift.csv` (any case) are not part of the
//! question bank and are skipped.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use survey_model::ReferenceCatalog;
use tracing::{debug, warn};

use crate::csv_utils::{GROUP_HEADERS, QUESTION_HEADERS, find_header, get_optional, read_rows};
use crate::error::{CatalogError, Result};

/// Collections never loaded into the question bank.
pub const IGNORED_COLLECTIONS: &[&str] = &["lift"];

/// Load every CSV file in `dir` into a catalog.
pub fn load_catalog_dir(dir: &Path) -> Result<ReferenceCatalog> {
    let mut catalog = ReferenceCatalog::new();
    for path in catalog_files(dir)? {
        let Some(name) = collection_name(&path) else {
            continue;
        };
        if is_ignored(&name) {
            debug!(path = %path.display(), "skipping ignored collection");
            continue;
        }
        let file = File::open(&path).map_err(|e| CatalogError::io(&path, e))?;
        let accepted = load_collection(&mut catalog, &name, file)
            .map_err(|e| CatalogError::csv(&path, e))?;
        debug!(collection = %name, rows = accepted, "loaded collection");
    }
    debug!(
        dir = %dir.display(),
        collections = catalog.collections().len(),
        rows = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Add the rows of one CSV collection to `catalog`.
///
/// The collection is registered even when the file lacks a question column
/// or every row is skipped. Returns the number of accepted rows.
pub fn load_collection<R: std::io::Read>(
    catalog: &mut ReferenceCatalog,
    name: &str,
    reader: R,
) -> std::result::Result<usize, csv::Error> {
    let (headers, rows) = read_rows(reader)?;
    catalog.add_collection(name);

    let Some(question_key) = find_header(&headers, QUESTION_HEADERS) else {
        warn!(collection = name, "no question column, collection left empty");
        return Ok(0);
    };
    let group_key = find_header(&headers, GROUP_HEADERS);

    let mut accepted = 0;
    for row in &rows {
        let question = get_optional(row, question_key);
        let group = group_key.and_then(|key| get_optional(row, key));
        if catalog.insert_raw(name, question, group) {
            accepted += 1;
        }
    }
    if accepted < rows.len() {
        debug!(
            collection = name,
            skipped = rows.len() - accepted,
            "skipped incomplete rows"
        );
    }
    Ok(accepted)
}

fn catalog_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| CatalogError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CatalogError::io(dir, e))?.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn collection_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.trim().to_string())
        .filter(|stem| !stem.is_empty())
}

fn is_ignored(name: &str) -> bool {
    IGNORED_COLLECTIONS
        .iter()
        .any(|ignored| name.eq_ignore_ascii_case(ignored))
}
