use serde::{Deserialize, Serialize};

use crate::group::Group;

/// One output column of the survey template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledColumn {
    /// Column label, unique within a generation run.
    pub label: String,
    pub group: Group,
    /// Question text the label was derived from.
    pub source_question: String,
}

impl LabeledColumn {
    pub fn new(label: impl Into<String>, group: Group, source_question: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            group,
            source_question: source_question.into(),
        }
    }
}
