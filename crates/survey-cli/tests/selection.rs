//! Integration tests for selection file loading.

use std::fs;

use survey_cli::selection::{MAX_QUANTITY, load_selection};
use survey_map::{TemplateOptions, generate};
use survey_model::{CROSS_PRODUCT_GROUP, Group};
use survey_standards::{BusinessType, CatalogSource};

const SELECTION: &str = r#"
business_type = "Manufacturing"
details = ["Brand", "  "]

[[questions]]
text = "Company name"
quantity = 2

[[questions]]
text = "   "

[[questions]]
text = "Favourite colour"
group = "Extras"

[[products]]
name = "Soap"
"#;

#[test]
fn loads_selection_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.toml");
    fs::write(&path, SELECTION).unwrap();

    let selection = load_selection(&path).unwrap();

    assert_eq!(selection.business_type, Some(BusinessType::Manufacturing));
    assert_eq!(selection.request.questions.len(), 2);
    assert_eq!(selection.request.questions[0].quantity.get(), 2);
    assert_eq!(
        selection.request.questions[1].group_hint,
        Group::resolved("Extras")
    );
    assert_eq!(selection.request.details, vec!["Brand".to_string()]);
    assert_eq!(selection.request.products.len(), 1);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let error = load_selection(&path).unwrap_err();

    assert!(format!("{error:#}").contains("absent.toml"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.toml");
    fs::write(&path, "[[questions]]\ntext = \"Name\"\ncount = 2\n").unwrap();

    assert!(load_selection(&path).is_err());
}

#[test]
fn over_limit_quantity_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.toml");
    let body = format!(
        "[[questions]]\ntext = \"Name\"\nquantity = {}\n",
        MAX_QUANTITY + 1
    );
    fs::write(&path, body).unwrap();

    let error = load_selection(&path).unwrap_err();

    assert!(format!("{error:#}").contains("outside"));
}

#[test]
fn selection_drives_generation_with_embedded_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.toml");
    fs::write(&path, SELECTION).unwrap();
    let selection = load_selection(&path).unwrap();

    let source = CatalogSource::resolve(None, selection.business_type).unwrap();
    let catalog = source.load().unwrap();
    let generation = generate(&selection.request, &catalog, &TemplateOptions::default());

    let labels: Vec<&str> = generation.labels().collect();
    assert_eq!(
        labels,
        vec![
            "Interviewer name",
            "Company name#1",
            "Company name#2",
            "Favourite colour",
            "Soap-Brand",
        ]
    );
    assert_eq!(generation.columns[1].group, Group::resolved("Respondent Profile"));
    assert_eq!(generation.columns[3].group, Group::resolved("Extras"));
    assert_eq!(generation.columns[4].group.as_str(), CROSS_PRODUCT_GROUP);
}
