//! Selection files: the questions, products and details a template is built from.
//!
//! ```toml
//! business_type = "retail"
//! details = ["Brand", "Price"]
//!
//! [[questions]]
//! text = "Name"
//! quantity = 2
//!
//! [[products]]
//! name = "Shampoo"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use survey_model::{GenerationRequest, Group, Quantity, SelectedProduct, SelectedQuestion};
use survey_standards::BusinessType;
use tracing::warn;

/// Largest quantity a single question or product may request.
pub const MAX_QUANTITY: u32 = 20;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SelectionFile {
    business_type: Option<String>,
    preferred_groups: Option<Vec<String>>,
    #[serde(default)]
    details: Vec<String>,
    #[serde(default)]
    questions: Vec<QuestionEntry>,
    #[serde(default)]
    products: Vec<ProductEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionEntry {
    text: String,
    #[serde(default = "default_quantity")]
    quantity: u32,
    group: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductEntry {
    name: String,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// A parsed selection file.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub request: GenerationRequest,
    /// Replaces the default group order when present.
    pub preferred_groups: Option<Vec<String>>,
    /// Embedded catalog to use when no catalog is given on the command line.
    pub business_type: Option<BusinessType>,
}

pub fn load_selection(path: &Path) -> Result<Selection> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read selection file {}", path.display()))?;
    parse_selection(&text).with_context(|| format!("parse selection file {}", path.display()))
}

pub fn parse_selection(text: &str) -> Result<Selection> {
    let file: SelectionFile = toml::from_str(text)?;

    let business_type = file
        .business_type
        .as_deref()
        .map(str::parse::<BusinessType>)
        .transpose()?;

    let mut questions = Vec::with_capacity(file.questions.len());
    for entry in file.questions {
        let text = entry.text.trim();
        if text.is_empty() {
            warn!("skipping blank question");
            continue;
        }
        let quantity = checked_quantity(entry.quantity, text)?;
        questions.push(
            SelectedQuestion::new(text, quantity)
                .with_group(Group::from_optional(entry.group.as_deref())),
        );
    }

    let mut products = Vec::with_capacity(file.products.len());
    for entry in file.products {
        if entry.name.trim().is_empty() {
            warn!("skipping product with blank name");
            continue;
        }
        let quantity = checked_quantity(entry.quantity, &entry.name)?;
        products.push(SelectedProduct::new(entry.name, quantity)?);
    }

    let mut details = Vec::with_capacity(file.details.len());
    for detail in file.details {
        let detail = detail.trim();
        if detail.is_empty() {
            warn!("skipping blank detail");
            continue;
        }
        details.push(detail.to_string());
    }

    let preferred_groups = file.preferred_groups.map(|groups| {
        groups
            .into_iter()
            .map(|group| group.trim().to_string())
            .filter(|group| !group.is_empty())
            .collect()
    });

    Ok(Selection {
        request: GenerationRequest {
            questions,
            products,
            details,
        },
        preferred_groups,
        business_type,
    })
}

fn checked_quantity(value: u32, item: &str) -> Result<Quantity> {
    ensure!(
        (1..=MAX_QUANTITY).contains(&value),
        "quantity {value} for '{item}' is outside 1..={MAX_QUANTITY}"
    );
    Ok(Quantity::new(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_selection_uses_defaults() {
        let selection = parse_selection("[[questions]]\ntext = \"Name\"\n").unwrap();
        assert_eq!(selection.request.questions.len(), 1);
        assert_eq!(selection.request.questions[0].quantity, Quantity::ONE);
        assert_eq!(selection.request.questions[0].group_hint, Group::Unresolved);
        assert!(selection.preferred_groups.is_none());
        assert!(selection.business_type.is_none());
    }

    #[test]
    fn quantity_upper_bound_is_inclusive() {
        let ok = parse_selection("[[questions]]\ntext = \"Name\"\nquantity = 20\n").unwrap();
        assert_eq!(ok.request.questions[0].quantity.get(), MAX_QUANTITY);
        assert!(parse_selection("[[questions]]\ntext = \"Name\"\nquantity = 21\n").is_err());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let error = parse_selection("[[products]]\nname = \"Soap\"\nquantity = 0\n").unwrap_err();
        assert!(error.to_string().contains("Soap"));
    }

    #[test]
    fn unknown_business_type_is_an_error() {
        assert!(parse_selection("business_type = \"farming\"\n").is_err());
    }
}
