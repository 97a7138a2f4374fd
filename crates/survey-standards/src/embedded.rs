//! Question banks compiled into the binary, keyed by business type.
//!
//! Each embedded catalog is a single CSV with a leading `collection` column
//! followed by the usual question and group columns.

use std::fmt;
use std::str::FromStr;

use survey_model::ReferenceCatalog;
use tracing::debug;

use crate::csv_utils::{GROUP_HEADERS, QUESTION_HEADERS, find_header, get_optional, read_rows};
use crate::error::{CatalogError, Result};

const RETAIL_CSV: &str = include_str!("../catalogs/retail.csv");
const MANUFACTURING_CSV: &str = include_str!("../catalogs/manufacturing.csv");
const SERVICES_CSV: &str = include_str!("../catalogs/services.csv");

const COLLECTION_HEADER: &str = "collection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessType {
    Retail,
    Manufacturing,
    Services,
}

impl BusinessType {
    pub const ALL: [Self; 3] = [Self::Retail, Self::Manufacturing, Self::Services];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Manufacturing => "manufacturing",
            Self::Services => "services",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::Retail => RETAIL_CSV,
            Self::Manufacturing => MANUFACTURING_CSV,
            Self::Services => SERVICES_CSV,
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                CatalogError::UnknownBusinessType(wanted.to_string(), known.join(", "))
            })
    }
}

/// Parse the embedded catalog for a business type.
pub fn embedded_catalog(kind: BusinessType) -> Result<ReferenceCatalog> {
    let path = format!("<embedded:{kind}>");
    let (headers, rows) =
        read_rows(kind.source().as_bytes()).map_err(|e| CatalogError::csv(&path, e))?;

    let mut catalog = ReferenceCatalog::new();
    let question_key = find_header(&headers, QUESTION_HEADERS);
    let group_key = find_header(&headers, GROUP_HEADERS);
    for row in &rows {
        let Some(collection) = get_optional(row, COLLECTION_HEADER) else {
            continue;
        };
        let question = question_key.and_then(|key| get_optional(row, key));
        let group = group_key.and_then(|key| get_optional(row, key));
        catalog.insert_raw(collection, question, group);
    }
    debug!(
        business_type = %kind,
        collections = catalog.collections().len(),
        rows = catalog.len(),
        "embedded catalog parsed"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_type_parses_case_insensitively() {
        assert_eq!(
            "Manufacturing".parse::<BusinessType>().unwrap(),
            BusinessType::Manufacturing
        );
        let err = "bakery".parse::<BusinessType>().unwrap_err();
        assert!(err.to_string().contains("retail, manufacturing, services"));
    }

    #[test]
    fn every_embedded_catalog_parses() {
        for kind in BusinessType::ALL {
            let catalog = embedded_catalog(kind).expect("embedded catalog");
            assert!(!catalog.is_empty(), "{kind} catalog is empty");
            assert!(catalog.contains("Role"), "{kind} catalog has no Role collection");
        }
    }

    #[test]
    fn only_manufacturing_is_cross_product() {
        let cross: Vec<_> = BusinessType::ALL
            .into_iter()
            .filter(|kind| embedded_catalog(*kind).unwrap().is_cross_product())
            .collect();
        assert_eq!(cross, vec![BusinessType::Manufacturing]);
    }
}
