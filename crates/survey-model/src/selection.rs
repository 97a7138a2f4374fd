//! User selections feeding a generation run.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::group::Group;

/// How many columns a question (or product) expands into. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Self = Self(NonZeroU32::MIN);

    pub fn new(value: u32) -> Result<Self> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(ModelError::InvalidQuantity(value))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Instance indices `1..=quantity`.
    pub fn instances(self) -> impl Iterator<Item = u32> {
        1..=self.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A standard question picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedQuestion {
    pub question: String,
    #[serde(default)]
    pub quantity: Quantity,
    /// Explicit group; [`Group::Unresolved`] means "infer from the catalog".
    #[serde(default)]
    pub group_hint: Group,
}

impl SelectedQuestion {
    pub fn new(question: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            question: question.into(),
            quantity,
            group_hint: Group::Unresolved,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<Group>) -> Self {
        self.group_hint = group.into();
        self
    }
}

/// A product picked for cross-product expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct SelectedProduct {
    pub name: String,
    pub quantity: Quantity,
}

#[derive(Deserialize)]
struct RawProduct {
    name: String,
    #[serde(default)]
    quantity: Quantity,
}

impl TryFrom<RawProduct> for SelectedProduct {
    type Error = ModelError;

    fn try_from(raw: RawProduct) -> Result<Self> {
        Self::new(raw.name, raw.quantity)
    }
}

impl SelectedProduct {
    pub fn new(name: impl Into<String>, quantity: Quantity) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ModelError::BlankProductName);
        }
        Ok(Self { name, quantity })
    }
}

/// Everything the user selected for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub questions: Vec<SelectedQuestion>,
    #[serde(default)]
    pub products: Vec<SelectedProduct>,
    /// Detail questions asked for every selected product instance.
    #[serde(default)]
    pub details: Vec<String>,
}

impl GenerationRequest {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!(Quantity::new(0), Err(ModelError::InvalidQuantity(0)));
        assert_eq!(Quantity::new(3).map(Quantity::get), Ok(3));
    }

    #[test]
    fn instances_are_one_based() {
        let quantity = Quantity::new(3).unwrap();
        assert_eq!(quantity.instances().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn blank_product_name_is_rejected() {
        assert_eq!(
            SelectedProduct::new("   ", Quantity::ONE),
            Err(ModelError::BlankProductName)
        );
    }

    #[test]
    fn empty_request_has_no_questions_or_products() {
        let request = GenerationRequest {
            details: vec!["Brand".to_string()],
            ..GenerationRequest::default()
        };
        assert!(request.is_empty());
    }
}
