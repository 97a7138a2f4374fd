//! Question grouping and column assembly for survey templates.
//!
//! The pipeline runs in one direction: selected questions are classified
//! into groups ([`GroupClassifier`]), ordered and expanded into uniquely
//! labeled columns ([`QuestionAssembler`], [`LabelAllocator`]), and followed
//! by product x detail columns ([`cross_product::expand`]). [`generate`]
//! runs all stages for one request.

#![deny(unsafe_code)]

pub mod assembler;
pub mod classifier;
pub mod cross_product;
pub mod labels;
pub mod normalize;
pub mod pipeline;
pub mod score;

pub use assembler::QuestionAssembler;
pub use classifier::{ClassifierConfig, DEFAULT_MATCH_THRESHOLD, GroupClassifier, GroupMatch};
pub use labels::LabelAllocator;
pub use normalize::normalize;
pub use pipeline::{Generation, GenerationStats, TemplateOptions, generate};
