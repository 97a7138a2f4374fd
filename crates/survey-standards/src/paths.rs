//! Catalog directory resolution.

use std::path::PathBuf;

/// Environment variable naming the default question bank directory.
pub const CATALOG_ENV_VAR: &str = "SURVEY_CATALOG_DIR";

/// Catalog directory from [`CATALOG_ENV_VAR`], if set and non-empty.
pub fn catalog_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
