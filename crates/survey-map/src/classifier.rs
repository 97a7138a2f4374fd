//! Fuzzy group inference against the reference catalog.

use serde::{Deserialize, Serialize};
use survey_model::{Group, ReferenceCatalog, ReferenceRow};
use tracing::{debug, trace};

use crate::normalize::normalize;
use crate::score::question_similarity;

/// Minimum similarity (0-100) for a catalog row to lend its group.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 80.0;

/// Tunable parameters for [`GroupClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum score on a 0-100 scale. Scores below it resolve to `N/A`.
    pub threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

/// Best catalog row for a question.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMatch {
    pub group: Group,
    pub reference: String,
    pub collection: String,
    /// Similarity on a 0-100 scale.
    pub score: f64,
}

struct Entry<'a> {
    collection: &'a str,
    row: &'a ReferenceRow,
    normalized: String,
}

/// Assigns questions to groups by fuzzy comparison with a catalog.
///
/// The catalog is normalized once up front. Each classification scans every
/// row and keeps the first row with the highest score, so ties resolve in
/// catalog order (collections, then rows).
pub struct GroupClassifier<'a> {
    entries: Vec<Entry<'a>>,
    config: ClassifierConfig,
}

impl<'a> GroupClassifier<'a> {
    pub fn new(catalog: &'a ReferenceCatalog, config: ClassifierConfig) -> Self {
        let entries = catalog
            .rows()
            .map(|(collection, row)| Entry {
                collection,
                row,
                normalized: normalize(row.question()),
            })
            .collect();
        Self { entries, config }
    }

    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    /// Highest scoring catalog row, regardless of the threshold.
    ///
    /// Returns `None` for blank questions or when nothing scores above zero.
    pub fn best_match(&self, question: &str) -> Option<GroupMatch> {
        let needle = normalize(question);
        if needle.is_empty() {
            return None;
        }

        let mut best: Option<(&Entry<'a>, f64)> = None;
        for entry in &self.entries {
            let score = question_similarity(&needle, &entry.normalized);
            trace!(question = %needle, reference = %entry.normalized, score, "scored reference");
            if score > best.map_or(0.0, |(_, top)| top) {
                best = Some((entry, score));
            }
        }

        best.map(|(entry, score)| GroupMatch {
            group: entry.row.group(),
            reference: entry.row.question().to_string(),
            collection: entry.collection.to_string(),
            score,
        })
    }

    /// Group for a question, or [`Group::Unresolved`] when no row reaches
    /// the threshold.
    pub fn classify(&self, question: &str) -> Group {
        self.resolve(question, self.best_match(question).as_ref())
    }

    /// Group implied by an already computed best match.
    pub fn resolve(&self, question: &str, found: Option<&GroupMatch>) -> Group {
        match found {
            Some(found) if found.score >= self.config.threshold => {
                debug!(
                    question,
                    group = %found.group,
                    reference = %found.reference,
                    score = found.score,
                    "question classified"
                );
                found.group.clone()
            }
            Some(found) => {
                debug!(
                    question,
                    best = %found.reference,
                    score = found.score,
                    threshold = self.config.threshold,
                    "no group above threshold"
                );
                Group::Unresolved
            }
            None => Group::Unresolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ReferenceCatalog {
        let mut catalog = ReferenceCatalog::new();
        catalog.insert_raw("Profile", Some("Respondent name"), Some("Respondent Profile"));
        catalog.insert_raw("Profile", Some("Age"), Some("Respondent Profile"));
        catalog.insert_raw("Market", Some("Main competitor"), Some("Customer & Market"));
        catalog
    }

    #[test]
    fn exact_text_classifies_to_its_group() {
        let catalog = catalog();
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());
        assert_eq!(
            classifier.classify("Main competitor"),
            Group::resolved("Customer & Market")
        );
    }

    #[test]
    fn numbered_variant_matches_after_normalization() {
        let catalog = catalog();
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());
        assert_eq!(classifier.classify("AGE2"), Group::resolved("Respondent Profile"));
    }

    #[test]
    fn unrelated_text_is_unresolved() {
        let catalog = catalog();
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());
        assert_eq!(classifier.classify("xyzzy qwv"), Group::Unresolved);
        assert_eq!(classifier.classify("   "), Group::Unresolved);
    }

    #[test]
    fn ties_resolve_to_first_row() {
        let mut catalog = ReferenceCatalog::new();
        catalog.insert_raw("First", Some("Budget"), Some("Business & Strategy"));
        catalog.insert_raw("Second", Some("Budget"), Some("Special Topic"));
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());

        let found = classifier.best_match("budget").expect("match");
        assert_eq!(found.collection, "First");
        assert_eq!(found.group, Group::resolved("Business & Strategy"));
    }

    #[test]
    fn threshold_is_configurable() {
        let catalog = catalog();
        let strict = GroupClassifier::new(&catalog, ClassifierConfig { threshold: 101.0 });
        assert_eq!(strict.classify("Main competitor"), Group::Unresolved);
    }

    #[test]
    fn resolve_applies_the_threshold_to_a_match() {
        let catalog = catalog();
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());
        let found = classifier.best_match("Main competitor");
        assert_eq!(
            classifier.resolve("Main competitor", found.as_ref()),
            Group::resolved("Customer & Market")
        );

        let weak = GroupMatch {
            group: Group::resolved("Customer & Market"),
            reference: "Main competitor".to_string(),
            collection: "Market".to_string(),
            score: DEFAULT_MATCH_THRESHOLD - 0.1,
        };
        assert_eq!(classifier.resolve("x", Some(&weak)), Group::Unresolved);
        let exact = GroupMatch {
            score: DEFAULT_MATCH_THRESHOLD,
            ..weak
        };
        assert_eq!(
            classifier.resolve("x", Some(&exact)),
            Group::resolved("Customer & Market")
        );
        assert_eq!(classifier.resolve("x", None), Group::Unresolved);
    }

    #[test]
    fn empty_catalog_never_matches() {
        let catalog = ReferenceCatalog::new();
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());
        assert!(classifier.best_match("Name").is_none());
        assert_eq!(classifier.classify("Name"), Group::Unresolved);
    }
}
