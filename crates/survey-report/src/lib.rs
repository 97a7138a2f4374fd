//! Survey template projections and writers.

pub mod template;
pub mod writer;

pub use template::{DEFAULT_BLANK_ROWS, QuestionRow, SurveyTemplate, TALL_HEADERS};
pub use writer::{
    OutputPaths, TALL_FILE_NAME, TemplateFormat, WIDE_FILE_NAME, write_outputs, write_tall,
    write_wide,
};
