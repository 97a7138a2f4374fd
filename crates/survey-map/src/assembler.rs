//! Ordered column assembly for standard questions.

use std::collections::BTreeSet;

use survey_model::{Group, LabeledColumn, SelectedQuestion};
use tracing::debug;

use crate::classifier::GroupClassifier;
use crate::labels::LabelAllocator;

/// Groups selected questions and expands them into labeled columns.
///
/// Output order:
/// 1. groups from the preferred list, in list order
/// 2. other resolved groups, in first-encountered order
/// 3. unresolved questions (`N/A`)
///
/// Within a group questions keep their selection order.
pub struct QuestionAssembler<'c, 'p> {
    classifier: &'c GroupClassifier<'c>,
    preferred_groups: &'p [String],
}

impl<'c, 'p> QuestionAssembler<'c, 'p> {
    pub fn new(classifier: &'c GroupClassifier<'c>, preferred_groups: &'p [String]) -> Self {
        Self {
            classifier,
            preferred_groups,
        }
    }

    /// An explicit group hint wins; otherwise the classifier decides.
    pub fn resolve_group(&self, question: &SelectedQuestion) -> Group {
        match &question.group_hint {
            Group::Resolved(_) => question.group_hint.clone(),
            Group::Unresolved => self.classifier.classify(&question.question),
        }
    }

    pub fn assemble(
        &self,
        questions: &[SelectedQuestion],
        labels: &mut LabelAllocator,
    ) -> Vec<LabeledColumn> {
        let mut buckets: Vec<(String, Vec<&SelectedQuestion>)> = Vec::new();
        let mut unmatched: Vec<&SelectedQuestion> = Vec::new();

        for question in questions {
            match self.resolve_group(question) {
                Group::Resolved(name) => {
                    match buckets.iter_mut().find(|(group, _)| *group == name) {
                        Some((_, items)) => items.push(question),
                        None => buckets.push((name, vec![question])),
                    }
                }
                Group::Unresolved => unmatched.push(question),
            }
        }

        let mut emitted: BTreeSet<&str> = BTreeSet::new();
        let mut ordered: Vec<&(String, Vec<&SelectedQuestion>)> = Vec::new();
        for preferred in self.preferred_groups {
            if let Some(bucket) = buckets.iter().find(|(group, _)| group == preferred) {
                if emitted.insert(bucket.0.as_str()) {
                    ordered.push(bucket);
                }
            }
        }
        for bucket in &buckets {
            if emitted.insert(bucket.0.as_str()) {
                ordered.push(bucket);
            }
        }

        let mut columns = Vec::new();
        for (group, items) in ordered {
            debug!(group = %group, questions = items.len(), "emitting group");
            let group = Group::Resolved(group.clone());
            for question in items {
                expand_question(question, &group, labels, &mut columns);
            }
        }
        if !unmatched.is_empty() {
            debug!(questions = unmatched.len(), "emitting unmatched questions");
        }
        for question in unmatched {
            expand_question(question, &Group::Unresolved, labels, &mut columns);
        }
        columns
    }
}

fn expand_question(
    question: &SelectedQuestion,
    group: &Group,
    labels: &mut LabelAllocator,
    columns: &mut Vec<LabeledColumn>,
) {
    let total = question.quantity.get();
    for index in question.quantity.instances() {
        let label = labels.allocate(&question.question, index, total);
        columns.push(LabeledColumn::new(
            label,
            group.clone(),
            question.question.clone(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use survey_model::{Quantity, ReferenceCatalog};

    use super::*;
    use crate::classifier::ClassifierConfig;

    fn question(text: &str, quantity: u32, group: &str) -> SelectedQuestion {
        SelectedQuestion::new(text, Quantity::new(quantity).unwrap()).with_group(group)
    }

    fn groups(columns: &[LabeledColumn]) -> Vec<String> {
        columns.iter().map(|c| c.group.to_string()).collect()
    }

    #[test]
    fn preferred_groups_lead_then_others_then_unmatched() {
        let catalog = ReferenceCatalog::new();
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());
        let preferred = vec!["A".to_string(), "B".to_string()];
        let assembler = QuestionAssembler::new(&classifier, &preferred);

        let questions = vec![
            question("q-b", 1, "B"),
            question("q-none", 1, ""),
            question("q-a", 2, "A"),
            question("q-c", 1, "C"),
            question("q-b2", 1, "B"),
        ];
        let columns = assembler.assemble(&questions, &mut LabelAllocator::new());

        assert_eq!(groups(&columns), vec!["A", "A", "B", "B", "C", "N/A"]);
        let labels: Vec<_> = columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["q-a#1", "q-a#2", "q-b", "q-b2", "q-c", "q-none"]);
    }

    #[test]
    fn duplicate_preferred_entries_emit_once() {
        let catalog = ReferenceCatalog::new();
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());
        let preferred = vec!["A".to_string(), "A".to_string()];
        let assembler = QuestionAssembler::new(&classifier, &preferred);

        let columns =
            assembler.assemble(&[question("q", 1, "A")], &mut LabelAllocator::new());
        assert_eq!(columns.len(), 1);
    }

    #[test]
    fn hint_overrides_classification() {
        let mut catalog = ReferenceCatalog::new();
        catalog.insert_raw("Profile", Some("Name"), Some("Respondent Profile"));
        let classifier = GroupClassifier::new(&catalog, ClassifierConfig::default());
        let assembler = QuestionAssembler::new(&classifier, &[]);

        assert_eq!(
            assembler.resolve_group(&question("Name", 1, "Special Topic")),
            Group::resolved("Special Topic")
        );
        assert_eq!(
            assembler.resolve_group(&question("Name", 1, "unknown")),
            Group::resolved("Respondent Profile")
        );
    }
}
