//! One template generation run.

use serde::{Deserialize, Serialize};
use survey_model::{
    DEFAULT_GROUP_ORDER, GenerationRequest, LabeledColumn, ROLE_COLLECTION, ReferenceCatalog,
};
use tracing::{debug, info, info_span, warn};

use crate::assembler::QuestionAssembler;
use crate::classifier::{ClassifierConfig, GroupClassifier};
use crate::cross_product;
use crate::labels::LabelAllocator;

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    pub classifier: ClassifierConfig,
    /// Groups emitted first, in this order.
    pub preferred_groups: Vec<String>,
    /// Catalog collection whose questions always lead the template.
    pub role_collection: String,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            preferred_groups: DEFAULT_GROUP_ORDER.iter().map(|g| (*g).to_string()).collect(),
            role_collection: ROLE_COLLECTION.to_string(),
        }
    }
}

/// Column counts per pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub role: usize,
    pub standard: usize,
    pub cross_product: usize,
    /// Standard-question columns that ended up in `N/A`.
    pub unmatched: usize,
}

impl GenerationStats {
    pub fn total(&self) -> usize {
        self.role + self.standard + self.cross_product
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    pub columns: Vec<LabeledColumn>,
    pub stats: GenerationStats,
}

impl Generation {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }
}

/// Build the ordered column list for one request.
///
/// Role questions lead, standard questions follow in group order, and
/// cross-product columns close the list when the catalog supports them.
/// All labels share a single allocator scoped to this call.
pub fn generate(
    request: &GenerationRequest,
    catalog: &ReferenceCatalog,
    options: &TemplateOptions,
) -> Generation {
    let span = info_span!(
        "generate",
        questions = request.questions.len(),
        products = request.products.len(),
        details = request.details.len()
    );
    let _guard = span.enter();
    if request.is_empty() {
        debug!("nothing selected, only role columns will be emitted");
    }

    let mut labels = LabelAllocator::new();
    let classifier = GroupClassifier::new(catalog, options.classifier);
    let mut columns = role_columns(catalog, &options.role_collection, &mut labels);
    let role = columns.len();

    let assembler = QuestionAssembler::new(&classifier, &options.preferred_groups);
    let standard = assembler.assemble(&request.questions, &mut labels);
    let unmatched = standard.iter().filter(|c| !c.group.is_resolved()).count();
    let standard_count = standard.len();
    columns.extend(standard);

    let cross = if catalog.is_cross_product() {
        cross_product::expand(&request.products, &request.details, &mut labels)
    } else {
        if !request.products.is_empty() {
            warn!(
                products = request.products.len(),
                "catalog has no product collections, ignoring selected products"
            );
        }
        Vec::new()
    };
    let cross_count = cross.len();
    columns.extend(cross);

    let stats = GenerationStats {
        role,
        standard: standard_count,
        cross_product: cross_count,
        unmatched,
    };
    info!(
        columns = stats.total(),
        role = stats.role,
        standard = stats.standard,
        cross_product = stats.cross_product,
        unmatched = stats.unmatched,
        "generation complete"
    );
    Generation { columns, stats }
}

fn role_columns(
    catalog: &ReferenceCatalog,
    collection: &str,
    labels: &mut LabelAllocator,
) -> Vec<LabeledColumn> {
    let Some(roles) = catalog.get(collection) else {
        debug!(collection, "no role collection in catalog");
        return Vec::new();
    };
    roles
        .listed
        .iter()
        .map(|listed| {
            let label = labels.allocate(&listed.question, 1, 1);
            LabeledColumn::new(label, listed.group.clone(), listed.question.as_str())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use survey_model::{Group, Quantity, SelectedQuestion};

    use super::*;

    #[test]
    fn empty_request_yields_only_role_columns() {
        let mut catalog = ReferenceCatalog::new();
        catalog.insert_raw(ROLE_COLLECTION, Some("Interviewer"), Some("Respondent Profile"));
        let result = generate(&GenerationRequest::default(), &catalog, &TemplateOptions::default());
        assert_eq!(result.labels().collect::<Vec<_>>(), vec!["Interviewer"]);
        assert_eq!(result.stats.role, 1);
        assert_eq!(result.stats.total(), 1);
    }

    #[test]
    fn ungrouped_role_questions_lead_as_unresolved() {
        let mut catalog = ReferenceCatalog::new();
        catalog.insert_raw(ROLE_COLLECTION, Some("Interviewer name"), None);
        catalog.insert_raw(ROLE_COLLECTION, Some("Interview date"), Some("Respondent Profile"));
        let result = generate(&GenerationRequest::default(), &catalog, &TemplateOptions::default());

        let pairs: Vec<(&str, Group)> = result
            .columns
            .iter()
            .map(|c| (c.label.as_str(), c.group.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Interviewer name", Group::Unresolved),
                ("Interview date", Group::resolved("Respondent Profile")),
            ]
        );
        assert_eq!(result.stats.role, 2);
    }

    #[test]
    fn ungrouped_role_questions_are_not_classification_targets() {
        let mut catalog = ReferenceCatalog::new();
        catalog.insert_raw(ROLE_COLLECTION, Some("Interviewer name"), None);
        let request = GenerationRequest {
            questions: vec![SelectedQuestion::new("Interviewer name", Quantity::ONE)],
            ..GenerationRequest::default()
        };
        let result = generate(&request, &catalog, &TemplateOptions::default());

        assert_eq!(
            result.labels().collect::<Vec<_>>(),
            vec!["Interviewer name", "Interviewer name#2"]
        );
        assert_eq!(result.columns[1].group, Group::Unresolved);
        assert_eq!(result.stats.unmatched, 1);
    }

    #[test]
    fn empty_everything_is_well_formed() {
        let result = generate(
            &GenerationRequest::default(),
            &ReferenceCatalog::new(),
            &TemplateOptions::default(),
        );
        assert!(result.columns.is_empty());
        assert_eq!(result.stats, GenerationStats::default());
    }

    #[test]
    fn selected_role_question_does_not_collide() {
        let mut catalog = ReferenceCatalog::new();
        catalog.insert_raw(ROLE_COLLECTION, Some("Interviewer"), Some("Respondent Profile"));
        let request = GenerationRequest {
            questions: vec![SelectedQuestion::new("Interviewer", Quantity::ONE)],
            ..GenerationRequest::default()
        };
        let result = generate(&request, &catalog, &TemplateOptions::default());
        assert_eq!(
            result.labels().collect::<Vec<_>>(),
            vec!["Interviewer", "Interviewer#2"]
        );
        assert_eq!(result.columns[1].group, Group::resolved("Respondent Profile"));
    }
}
