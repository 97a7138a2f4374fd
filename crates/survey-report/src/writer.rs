//! CSV output for survey templates.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use crate::template::{SurveyTemplate, TALL_HEADERS};

pub const WIDE_FILE_NAME: &str = "survey_template.csv";
pub const TALL_FILE_NAME: &str = "survey_questions.csv";

/// Which projections to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    /// Header rows plus blank data rows, one column per question.
    Wide,
    /// One row per question.
    Tall,
}

/// Files produced by [`write_outputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub wide: Option<PathBuf>,
    pub tall: Option<PathBuf>,
}

/// Write the wide projection. An empty template produces an empty file.
pub fn write_wide<W: Write>(template: &SurveyTemplate, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    if !template.is_empty() {
        for row in template.wide_rows() {
            csv.write_record(&row).context("write wide row")?;
        }
    }
    csv.flush().context("flush wide template")?;
    Ok(())
}

/// Write the tall projection, header first.
pub fn write_tall<W: Write>(template: &SurveyTemplate, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(TALL_HEADERS)
        .context("write tall header")?;
    for row in template.tall_rows() {
        csv.serialize(&row)
            .with_context(|| format!("write question row {}", row.number))?;
    }
    csv.flush().context("flush tall template")?;
    Ok(())
}

/// Write the requested projections into `output_dir`, creating it if needed.
pub fn write_outputs(
    template: &SurveyTemplate,
    output_dir: &Path,
    formats: &[TemplateFormat],
) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;

    let mut outputs = OutputPaths::default();
    for format in formats {
        match format {
            TemplateFormat::Wide => {
                let path = output_dir.join(WIDE_FILE_NAME);
                let file = create(&path)?;
                write_wide(template, file)
                    .with_context(|| format!("write {}", path.display()))?;
                info!(path = %path.display(), columns = template.columns().len(), "wrote wide template");
                outputs.wide = Some(path);
            }
            TemplateFormat::Tall => {
                let path = output_dir.join(TALL_FILE_NAME);
                let file = create(&path)?;
                write_tall(template, file)
                    .with_context(|| format!("write {}", path.display()))?;
                info!(path = %path.display(), rows = template.columns().len(), "wrote question list");
                outputs.tall = Some(path);
            }
        }
    }
    Ok(outputs)
}

fn create(path: &Path) -> Result<fs::File> {
    fs::File::create(path).with_context(|| format!("create {}", path.display()))
}
