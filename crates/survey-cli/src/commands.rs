use anyhow::{Context, Result, ensure};
use comfy_table::{Cell, CellAlignment, Table};
use survey_cli::selection::load_selection;
use survey_map::{ClassifierConfig, GroupClassifier, TemplateOptions, generate};
use survey_model::{Collection, ReferenceCatalog};
use survey_report::{OutputPaths, SurveyTemplate, write_outputs};
use survey_standards::{BusinessType, CatalogSource};
use tracing::{info, info_span};

use crate::cli::{CatalogArgs, CatalogSourceArgs, ClassifyArgs, GenerateArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};
use crate::types::GenerateResult;

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", selection = %args.selection.display());
    let _guard = span.enter();

    let selection = load_selection(&args.selection)?;
    let source = resolve_source(&args.source, selection.business_type)?;
    let catalog = load_catalog(&source)?;

    let mut options = TemplateOptions {
        classifier: classifier_config(args.threshold)?,
        ..TemplateOptions::default()
    };
    if let Some(groups) = selection.preferred_groups {
        options.preferred_groups = groups;
    }

    let generation = generate(&selection.request, &catalog, &options);
    let template = SurveyTemplate::new(generation.columns, args.blank_rows);

    let outputs = if args.dry_run {
        info!("dry run, no files written");
        OutputPaths::default()
    } else {
        write_outputs(&template, &args.output_dir, &args.format.formats())?
    };

    Ok(GenerateResult {
        catalog: source.describe(),
        cross_product: catalog.is_cross_product(),
        template,
        stats: generation.stats,
        output_dir: args.output_dir.clone(),
        outputs,
        dry_run: args.dry_run,
    })
}

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let source = resolve_source(&args.source, None)?;
    let catalog = load_catalog(&source)?;

    println!("Catalog: {}", source.describe());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Collection"),
        header_cell("Questions"),
        header_cell("Groups"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for collection in catalog.collections() {
        let mut groups: Vec<&str> = Vec::new();
        for row in &collection.rows {
            if !groups.contains(&row.group_name()) {
                groups.push(row.group_name());
            }
        }
        let groups_cell = if groups.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(groups.join(", "))
        };
        table.add_row(vec![
            Cell::new(&collection.name),
            Cell::new(collection.len()),
            groups_cell,
        ]);
    }
    println!("{table}");
    let standard: usize = catalog.standard_collections().map(Collection::len).sum();
    println!("Standard questions: {standard}");
    println!(
        "Product cross-product: {}",
        if catalog.is_cross_product() {
            "available"
        } else {
            "not available"
        }
    );
    Ok(())
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let source = resolve_source(&args.source, None)?;
    let catalog = load_catalog(&source)?;
    let classifier = GroupClassifier::new(&catalog, classifier_config(args.threshold)?);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Text"),
        header_cell("Group"),
        header_cell("Closest question"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for text in &args.texts {
        let found = classifier.best_match(text);
        let group = classifier.resolve(text, found.as_ref());
        let (reference, score) = match found {
            Some(found) => (Cell::new(found.reference), Cell::new(format!("{:.1}", found.score))),
            None => (dim_cell("-"), dim_cell("-")),
        };
        let group_cell = if group.is_resolved() {
            Cell::new(group.as_str())
        } else {
            dim_cell(group.as_str())
        };
        table.add_row(vec![Cell::new(text), group_cell, reference, score]);
    }
    println!("{table}");
    Ok(())
}

/// Catalog directory from the command line, then a business type from the
/// command line or the selection file, then the environment.
fn resolve_source(
    args: &CatalogSourceArgs,
    selection_business_type: Option<BusinessType>,
) -> Result<CatalogSource> {
    let business_type = args
        .business_type
        .map(BusinessType::from)
        .or(selection_business_type);
    Ok(CatalogSource::resolve(args.catalog_dir.clone(), business_type)?)
}

fn load_catalog(source: &CatalogSource) -> Result<ReferenceCatalog> {
    let catalog = source
        .load()
        .with_context(|| format!("load catalog from {}", source.describe()))?;
    info!(
        source = %source.describe(),
        collections = catalog.collections().len(),
        rows = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn classifier_config(threshold: Option<f64>) -> Result<ClassifierConfig> {
    let mut config = ClassifierConfig::default();
    if let Some(threshold) = threshold {
        ensure!(
            (0.0..=100.0).contains(&threshold),
            "threshold must be between 0 and 100, got {threshold}"
        );
        config.threshold = threshold;
    }
    Ok(config)
}
