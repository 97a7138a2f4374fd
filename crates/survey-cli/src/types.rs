use std::path::PathBuf;

use survey_map::GenerationStats;
use survey_report::{OutputPaths, SurveyTemplate};

#[derive(Debug)]
pub struct GenerateResult {
    /// Human-readable catalog origin.
    pub catalog: String,
    pub cross_product: bool,
    pub template: SurveyTemplate,
    pub stats: GenerationStats,
    pub output_dir: PathBuf,
    /// Empty on a dry run.
    pub outputs: OutputPaths,
    pub dry_run: bool,
}
