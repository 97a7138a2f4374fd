//! Product x detail question columns.

use survey_model::{Group, LabeledColumn, SelectedProduct};

use crate::labels::LabelAllocator;

/// Base text of a cross-product column.
pub fn combined_question(product: &str, detail: &str) -> String {
    format!("{product}-{detail}")
}

/// One column per product instance and detail question.
///
/// Products and their instances come first, details vary fastest. Every
/// column belongs to the `Product & Details` group. Yields `D * sum(q_i)`
/// columns, or none when either list is empty.
pub fn expand(
    products: &[SelectedProduct],
    details: &[String],
    labels: &mut LabelAllocator,
) -> Vec<LabeledColumn> {
    if products.is_empty() || details.is_empty() {
        return Vec::new();
    }

    let group = Group::cross_product();
    let mut columns = Vec::new();
    for product in products {
        let total = product.quantity.get();
        for index in product.quantity.instances() {
            for detail in details {
                let base = combined_question(&product.name, detail);
                let label = labels.allocate(&base, index, total);
                columns.push(LabeledColumn::new(label, group.clone(), base));
            }
        }
    }
    columns
}
