//! The two projections of a generated column list.

use serde::Serialize;
use survey_model::LabeledColumn;

/// Blank data rows appended below the wide header rows by default.
pub const DEFAULT_BLANK_ROWS: usize = 5;

/// Header of the tall projection.
pub const TALL_HEADERS: [&str; 4] = ["No.", "Group", "Question", "Answer"];

/// One question of the tall (one row per column) projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRow {
    #[serde(rename = "No.")]
    pub number: usize,
    #[serde(rename = "Group")]
    pub group: String,
    #[serde(rename = "Question")]
    pub question: String,
    /// Always empty; filled in by respondents.
    #[serde(rename = "Answer")]
    pub answer: String,
}

/// Survey template built from an ordered column list.
#[derive(Debug, Clone)]
pub struct SurveyTemplate {
    columns: Vec<LabeledColumn>,
    blank_rows: usize,
}

impl SurveyTemplate {
    pub fn new(columns: Vec<LabeledColumn>, blank_rows: usize) -> Self {
        Self {
            columns,
            blank_rows,
        }
    }

    pub fn columns(&self) -> &[LabeledColumn] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn group_row(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.group.to_string()).collect()
    }

    pub fn label_row(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    /// Group row, label row, then the blank data rows.
    pub fn wide_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(2 + self.blank_rows);
        rows.push(self.group_row());
        rows.push(self.label_row());
        for _ in 0..self.blank_rows {
            rows.push(vec![String::new(); self.columns.len()]);
        }
        rows
    }

    /// One numbered row per column, answers left empty.
    pub fn tall_rows(&self) -> Vec<QuestionRow> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| QuestionRow {
                number: idx + 1,
                group: column.group.to_string(),
                question: column.label.clone(),
                answer: String::new(),
            })
            .collect()
    }

    /// Column count per group, in first-seen order.
    pub fn group_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for column in &self.columns {
            let group = column.group.as_str();
            match counts.iter_mut().find(|(name, _)| name == group) {
                Some((_, count)) => *count += 1,
                None => counts.push((group.to_string(), 1)),
            }
        }
        counts
    }
}
