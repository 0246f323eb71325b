//! Integration tests for the Session API
//!
//! These tests exercise the public API end to end over real files.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use sextant::{Session, SextantError, config::AppConfig, query::DimensionQuery};

fn write_annotation(dir: &Path, file_name: &str, body: &str) {
    fs::write(dir.join(file_name), body).expect("Failed to write annotation file");
}

fn example_annotation() -> &'static str {
    r#"
    <annotation>
      <size><width>500</width><height>400</height></size>
      <objects>
        <object>
          <type>actor</type>
          <boundary xmin="10" ymin="10" xmax="60" ymax="90"/>
        </object>
        <object>
          <type>class</type>
          <boundary xmin="0" ymin="0" xmax="500" ymax="400"/>
          <difficult>true</difficult>
        </object>
      </objects>
    </annotation>
    "#
}

#[test]
fn test_load_and_query_roundtrip() {
    let dir = tempdir().expect("Failed to create temp directory");
    write_annotation(dir.path(), "a.xml", example_annotation());

    let mut session = Session::new(dir.path(), AppConfig::default());

    let loaded = session.load("a.xml").expect("Failed to load annotation");
    assert_eq!(loaded.name(), "a");
    assert_eq!(loaded.object_count(), 2);
    assert!(loaded.diagnostics().is_empty());

    let diagram = session.diagram("a").expect("Diagram should be registered");
    assert_eq!(diagram.size(), (500, 400));
    assert_eq!(diagram.area(), 200_000);

    // Lookup also accepts the file name form.
    assert!(session.diagram("a.xml").is_some());

    assert_eq!(session.search_by_type("ACTOR"), vec!["a"]);
    assert_eq!(
        session.search_by_dimension(&DimensionQuery::new().with_min_width(100)),
        vec!["a"]
    );

    let stats = session.statistics().expect("Statistics should exist");
    assert_eq!(stats.diagram_count(), 1);
    assert_eq!(stats.object_count(), 2);
    assert_eq!(stats.object_types(), ["actor", "class"]);
    assert_eq!(stats.object_area(), Some((4000, 200_000)));
}

#[test]
fn test_duplicate_load_is_rejected() {
    let dir = tempdir().expect("Failed to create temp directory");
    write_annotation(dir.path(), "a.xml", example_annotation());

    let mut session = Session::new(dir.path(), AppConfig::default());
    session.load("a.xml").expect("First load should succeed");

    let err = session.load("a.xml").expect_err("Second load should fail");
    assert!(matches!(err, SextantError::Registry(_)));
    assert_eq!(session.registry().len(), 1);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let mut session = Session::new(dir.path(), AppConfig::default());

    let err = session.load("ghost.xml").expect_err("Load should fail");
    assert!(matches!(err, SextantError::FileNotFound(_)));
    assert!(session.registry().is_empty());
}

#[test]
fn test_parse_failure_leaves_registry_unchanged() {
    let dir = tempdir().expect("Failed to create temp directory");
    write_annotation(dir.path(), "broken.xml", "<annotation><size>");

    let mut session = Session::new(dir.path(), AppConfig::default());
    let err = session.load("broken.xml").expect_err("Load should fail");
    assert!(matches!(err, SextantError::Parse(_)));
    assert!(session.registry().is_empty());
}

#[test]
fn test_annotation_files_are_filtered_and_sorted() {
    let dir = tempdir().expect("Failed to create temp directory");
    write_annotation(dir.path(), "zeta.xml", example_annotation());
    write_annotation(dir.path(), "alpha.XML", example_annotation());
    write_annotation(dir.path(), "readme.txt", "not an annotation");

    let session = Session::new(dir.path(), AppConfig::default());
    let files = session.annotation_files().expect("Failed to list files");
    assert_eq!(files, vec!["alpha.XML", "zeta.xml"]);
}

#[test]
fn test_skipped_objects_are_reported_per_load() {
    let dir = tempdir().expect("Failed to create temp directory");
    write_annotation(
        dir.path(),
        "partial.xml",
        r#"
        <annotation>
          <size><width>100</width><height>100</height></size>
          <objects>
            <object>
              <type>kept</type>
              <boundary xmin="0" ymin="0" xmax="10" ymax="10"/>
            </object>
            <object>
              <type>dropped</type>
            </object>
          </objects>
        </annotation>
        "#,
    );

    let mut session = Session::new(dir.path(), AppConfig::default());
    let loaded = session.load("partial.xml").expect("Load should succeed");
    assert_eq!(loaded.object_count(), 1);
    assert_eq!(loaded.diagnostics().len(), 1);
}
