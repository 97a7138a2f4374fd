pub mod catalog;
pub mod column;
pub mod error;
pub mod group;
pub mod selection;

pub use catalog::{
    Collection, ListedQuestion, PRODUCT_DETAILS_COLLECTION, PRODUCT_LIST_COLLECTION,
    ROLE_COLLECTION, ReferenceCatalog, ReferenceRow,
};
pub use column::LabeledColumn;
pub use error::{ModelError, Result};
pub use group::{CROSS_PRODUCT_GROUP, DEFAULT_GROUP_ORDER, Group, UNRESOLVED_LABEL};
pub use selection::{GenerationRequest, Quantity, SelectedProduct, SelectedQuestion};
