//! Topical question groups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown for questions that could not be assigned a group.
pub const UNRESOLVED_LABEL: &str = "N/A";

/// Group assigned to every cross-product column.
pub const CROSS_PRODUCT_GROUP: &str = "Product & Details";

/// Values that stand for "no group" in question banks and selections.
const SENTINELS: &[&str] = &["", "n/a", "na", "unknown", "none", "nan", "null"];

/// Group preference used when the caller supplies none.
pub const DEFAULT_GROUP_ORDER: &[&str] = &[
    "Respondent Profile",
    "Customer & Market",
    "Business & Strategy",
    "Pain Points & Needs",
    "Product & Process",
    CROSS_PRODUCT_GROUP,
    "Special Topic",
];

/// A question's topical group.
///
/// Every legacy sentinel (`"N/A"`, `"unknown"`, blank, ...) collapses into
/// [`Group::Unresolved`], so a resolved group name is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Group {
    Resolved(String),
    #[default]
    Unresolved,
}

impl Group {
    /// Interpret a free-form group value from a catalog row or selection.
    pub fn from_hint(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_sentinel(trimmed) {
            Self::Unresolved
        } else {
            Self::Resolved(trimmed.to_string())
        }
    }

    /// Same as [`Group::from_hint`] but treats a missing value as unresolved.
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map_or(Self::Unresolved, Self::from_hint)
    }

    pub fn resolved(name: impl Into<String>) -> Self {
        Self::from_hint(&name.into())
    }

    pub fn cross_product() -> Self {
        Self::Resolved(CROSS_PRODUCT_GROUP.to_string())
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Resolved(name) => Some(name),
            Self::Unresolved => None,
        }
    }

    pub fn as_str(&self) -> &str {
        self.name().unwrap_or(UNRESOLVED_LABEL)
    }
}

fn is_sentinel(value: &str) -> bool {
    SENTINELS
        .iter()
        .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Group {
    fn from(value: String) -> Self {
        Self::from_hint(&value)
    }
}

impl From<&str> for Group {
    fn from(value: &str) -> Self {
        Self::from_hint(value)
    }
}

impl From<Group> for String {
    fn from(value: Group) -> Self {
        match value {
            Group::Resolved(name) => name,
            Group::Unresolved => UNRESOLVED_LABEL.to_string(),
        }
    }
}
