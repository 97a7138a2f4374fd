use std::fs;
use std::path::Path;

use survey_model::Group;
use survey_standards::{CatalogError, CatalogSource, load_catalog_dir};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn summarize(dir: &Path) -> String {
    let catalog = load_catalog_dir(dir).expect("load catalog");
    catalog
        .collections()
        .iter()
        .map(|c| format!("{}: {}", c.name, c.len()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn loads_collections_in_file_name_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "Profile.csv",
        "standard_question_th,q_group\nName,Respondent Profile\nAge,Respondent Profile\n",
    );
    write(
        dir.path(),
        "Market.csv",
        "\u{feff}Standard_Question_TH , Q_Group\nMain competitor,Customer & Market\n,Customer & Market\nBudget,\n",
    );
    write(dir.path(), "lift.csv", "standard_question_th,q_group\nLift,Lift\n");
    write(dir.path(), "notes.txt", "not a collection");

    insta::assert_snapshot!(summarize(dir.path()), @r"
    Market: 1
    Profile: 2
    ");
}

#[test]
fn rows_keep_their_groups() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "Role.csv",
        "question,group\nInterviewer name,Respondent Profile\n",
    );

    let catalog = load_catalog_dir(dir.path()).expect("load catalog");
    let (collection, row) = catalog.rows().next().expect("one row");
    assert_eq!(collection, "Role");
    assert_eq!(row.question(), "Interviewer name");
    assert_eq!(row.group(), Group::resolved("Respondent Profile"));
}

#[test]
fn file_without_question_column_is_an_empty_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "Product List.csv", "name,price\nSoap,10\n");
    write(
        dir.path(),
        "Product & Details.csv",
        "standard_question_th,q_group\nBrand,Product & Details\n",
    );

    let catalog = load_catalog_dir(dir.path()).expect("load catalog");
    assert!(catalog.is_cross_product());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist");

    let err = load_catalog_dir(&missing).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }), "got {err:?}");
}

#[test]
fn directory_source_loads_through_resolve() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "Profile.csv",
        "standard_question_th,q_group\nName,Respondent Profile\n",
    );

    let source = CatalogSource::resolve(Some(dir.path().to_path_buf()), None).unwrap();
    let catalog = source.load().expect("load");
    assert_eq!(catalog.len(), 1);
}
