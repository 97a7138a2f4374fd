//! Reference question bank used for group inference.

use serde::Serialize;

use crate::group::Group;

/// Collection listing the products offered for cross-product questions.
pub const PRODUCT_LIST_COLLECTION: &str = "Product List";
/// Collection listing per-product detail questions.
pub const PRODUCT_DETAILS_COLLECTION: &str = "Product & Details";
/// Collection whose questions always lead the template.
pub const ROLE_COLLECTION: &str = "Role";

/// A known question and the group it belongs to.
///
/// Both fields are guaranteed non-blank and the group is always resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRow {
    question: String,
    group: String,
}

impl ReferenceRow {
    /// Build a row from raw cell values.
    ///
    /// Returns `None` when the question is blank or the group is missing or
    /// a sentinel such as `N/A`.
    pub fn new(question: &str, group: &str) -> Option<Self> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        let Group::Resolved(group) = Group::from_hint(group) else {
            return None;
        };
        Some(Self {
            question: question.to_string(),
            group,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn group_name(&self) -> &str {
        &self.group
    }

    pub fn group(&self) -> Group {
        Group::Resolved(self.group.clone())
    }
}

/// A question as listed in a collection, whether or not it has a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedQuestion {
    pub question: String,
    pub group: Group,
}

/// A named collection of reference rows (one sheet of a question bank).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub name: String,
    /// Rows usable for classification.
    pub rows: Vec<ReferenceRow>,
    /// Every non-blank question in sheet order, including ungrouped ones.
    pub listed: Vec<ListedQuestion>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            listed: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ordered set of collections.
///
/// Collection order is insertion order; row order within a collection is
/// preserved. Both orders are observable through classification tie-breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceCatalog {
    collections: Vec<Collection>,
}

impl ReferenceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw row.
    ///
    /// A row with a question is always listed; it becomes a reference row
    /// only when its group is present and not a sentinel. The collection is
    /// created on first use even if the row is skipped, so an empty sheet
    /// still shows up as an (empty) collection.
    /// Returns whether a reference row was accepted.
    pub fn insert_raw(
        &mut self,
        collection: &str,
        question: Option<&str>,
        group: Option<&str>,
    ) -> bool {
        let index = self.collection_index(collection);
        let Some(question) = question.map(str::trim).filter(|q| !q.is_empty()) else {
            return false;
        };
        let collection = &mut self.collections[index];
        collection.listed.push(ListedQuestion {
            question: question.to_string(),
            group: Group::from_optional(group),
        });
        match group.and_then(|group| ReferenceRow::new(question, group)) {
            Some(row) => {
                collection.rows.push(row);
                true
            }
            None => false,
        }
    }

    /// Register an (initially empty) collection if it is not present yet.
    pub fn add_collection(&mut self, name: &str) {
        self.collection_index(name);
    }

    fn collection_index(&mut self, name: &str) -> usize {
        let name = name.trim();
        if let Some(index) = self.collections.iter().position(|c| c.name == name) {
            return index;
        }
        self.collections.push(Collection::new(name));
        self.collections.len() - 1
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every row in catalog order, paired with its collection name.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &ReferenceRow)> {
        self.collections
            .iter()
            .flat_map(|c| c.rows.iter().map(move |row| (c.name.as_str(), row)))
    }

    /// Total number of rows across all collections.
    pub fn len(&self) -> usize {
        self.collections.iter().map(Collection::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the catalog carries both product collections.
    pub fn is_cross_product(&self) -> bool {
        self.contains(PRODUCT_LIST_COLLECTION) && self.contains(PRODUCT_DETAILS_COLLECTION)
    }

    /// Collections offering standard (non-product) questions.
    pub fn standard_collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter().filter(|c| {
            c.name != PRODUCT_LIST_COLLECTION && c.name != PRODUCT_DETAILS_COLLECTION
        })
    }
}
