//! Question bank sources.
//!
//! A catalog comes either from a directory of CSV files (one file per
//! collection) or from an embedded catalog selected by [`BusinessType`].

#![deny(unsafe_code)]

pub mod csv_utils;
pub mod embedded;
pub mod error;
pub mod loader;
pub mod paths;

use std::path::PathBuf;

use survey_model::ReferenceCatalog;

pub use crate::embedded::{BusinessType, embedded_catalog};
pub use crate::error::{CatalogError, Result};
pub use crate::loader::{IGNORED_COLLECTIONS, load_catalog_dir, load_collection};
pub use crate::paths::{CATALOG_ENV_VAR, catalog_dir_from_env};

/// Where a run's question bank comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Directory(PathBuf),
    Embedded(BusinessType),
}

impl CatalogSource {
    /// Pick a source from explicit choices, falling back to
    /// [`CATALOG_ENV_VAR`].
    ///
    /// An explicit directory wins over a business type.
    pub fn resolve(dir: Option<PathBuf>, business_type: Option<BusinessType>) -> Result<Self> {
        if let Some(dir) = dir {
            return Ok(Self::Directory(dir));
        }
        if let Some(kind) = business_type {
            return Ok(Self::Embedded(kind));
        }
        catalog_dir_from_env()
            .map(Self::Directory)
            .ok_or(CatalogError::NoSource(CATALOG_ENV_VAR))
    }

    pub fn load(&self) -> Result<ReferenceCatalog> {
        match self {
            Self::Directory(dir) => load_catalog_dir(dir),
            Self::Embedded(kind) => embedded_catalog(*kind),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Directory(dir) => dir.display().to_string(),
            Self::Embedded(kind) => format!("embedded {kind} catalog"),
        }
    }
}
