//! Unit tests for the annotation parser.
//!
//! These tests verify the parsing contract: fatal failures for the file
//! (malformed XML, missing size) versus skip-and-continue handling of
//! individual malformed `<object>` entries.

use crate::{parse_str, error::Severity};

/// Helper to parse a source string and assert the parse succeeds.
fn parse_ok(source: &str) -> crate::ParseOutcome {
    parse_str(source, "test").unwrap_or_else(|err| panic!("expected parse to succeed: {err}"))
}

/// Helper to parse a source string and assert the parse fails.
fn parse_err(source: &str) -> crate::error::ParseError {
    match parse_str(source, "test") {
        Ok(_) => panic!("expected parse to fail"),
        Err(err) => err,
    }
}

#[test]
fn test_parse_well_formed_file() {
    let outcome = parse_ok(
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
        "#,
    );

    let diagram = outcome.diagram();
    assert_eq!(diagram.name(), "test");
    assert_eq!(diagram.size(), (500, 400));
    assert_eq!(diagram.area(), 200_000);
    assert!(outcome.diagnostics().is_empty());

    let objects = diagram.objects();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].obj_type(), "actor");
    assert_eq!(objects[0].width(), 50);
    assert_eq!(objects[0].height(), 80);
    assert!(!objects[0].difficult());
    assert_eq!(objects[1].obj_type(), "class");
    assert!(objects[1].difficult());
    assert!(!objects[1].truncated());
}

#[test]
fn test_missing_objects_container_is_not_an_error() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width>100</width><height>50</height></size>
        </annotation>
        "#,
    );

    assert!(outcome.diagram().objects().is_empty());
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn test_empty_objects_container() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width>100</width><height>50</height></size>
          <objects></objects>
        </annotation>
        "#,
    );

    assert!(outcome.diagram().objects().is_empty());
}

#[test]
fn test_malformed_objects_are_skipped_not_fatal() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width>500</width><height>400</height></size>
          <objects>
            <object>
              <type>first</type>
              <boundary xmin="0" ymin="0" xmax="10" ymax="10"/>
            </object>
            <object>
              <boundary xmin="0" ymin="0" xmax="10" ymax="10"/>
            </object>
            <object>
              <type>no-boundary</type>
            </object>
            <object>
              <type>last</type>
              <boundary xmin="1" ymin="1" xmax="2" ymax="2"/>
            </object>
          </objects>
        </annotation>
        "#,
    );

    // Two well-formed objects survive, in document order.
    let objects = outcome.diagram().objects();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].obj_type(), "first");
    assert_eq!(objects[1].obj_type(), "last");

    // One diagnostic per skipped object, all warnings.
    assert_eq!(outcome.diagnostics().len(), 2);
    for diagnostic in outcome.diagnostics() {
        assert_eq!(diagnostic.severity(), Severity::Warning);
        assert!(diagnostic.position().is_some());
    }
}

#[test]
fn test_non_integer_boundary_attribute_skips_object() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width>500</width><height>400</height></size>
          <objects>
            <object>
              <type>bad</type>
              <boundary xmin="ten" ymin="0" xmax="10" ymax="10"/>
            </object>
          </objects>
        </annotation>
        "#,
    );

    assert!(outcome.diagram().objects().is_empty());
    assert_eq!(outcome.diagnostics().len(), 1);
    assert!(outcome.diagnostics()[0].message().contains("`xmin`"));
}

#[test]
fn test_missing_boundary_attribute_skips_object() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width>500</width><height>400</height></size>
          <objects>
            <object>
              <type>bad</type>
              <boundary xmin="0" ymin="0" xmax="10"/>
            </object>
          </objects>
        </annotation>
        "#,
    );

    assert!(outcome.diagram().objects().is_empty());
    assert!(outcome.diagnostics()[0].message().contains("`ymax`"));
}

#[test]
fn test_empty_type_text_skips_object() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width>500</width><height>400</height></size>
          <objects>
            <object>
              <type></type>
              <boundary xmin="0" ymin="0" xmax="10" ymax="10"/>
            </object>
          </objects>
        </annotation>
        "#,
    );

    assert!(outcome.diagram().objects().is_empty());
    assert_eq!(outcome.diagnostics().len(), 1);
}

#[test]
fn test_flag_parsing_is_lenient() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width>500</width><height>400</height></size>
          <objects>
            <object>
              <type>a</type>
              <boundary xmin="0" ymin="0" xmax="1" ymax="1"/>
              <difficult> TRUE </difficult>
              <truncated>True</truncated>
            </object>
            <object>
              <type>b</type>
              <boundary xmin="0" ymin="0" xmax="1" ymax="1"/>
              <difficult>yes</difficult>
              <truncated>1</truncated>
            </object>
            <object>
              <type>c</type>
              <boundary xmin="0" ymin="0" xmax="1" ymax="1"/>
            </object>
          </objects>
        </annotation>
        "#,
    );

    let objects = outcome.diagram().objects();
    assert_eq!(objects.len(), 3);

    // Trimmed, case-insensitive "true" parses as true.
    assert!(objects[0].difficult());
    assert!(objects[0].truncated());

    // Any other text is false, never a parse error.
    assert!(!objects[1].difficult());
    assert!(!objects[1].truncated());

    // Absent elements default to false.
    assert!(!objects[2].difficult());
    assert!(!objects[2].truncated());
}

#[test]
fn test_inverted_boundary_is_preserved() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width>500</width><height>400</height></size>
          <objects>
            <object>
              <type>inverted</type>
              <boundary xmin="60" ymin="90" xmax="10" ymax="10"/>
            </object>
          </objects>
        </annotation>
        "#,
    );

    let object = &outcome.diagram().objects()[0];
    assert_eq!(object.width(), -50);
    assert_eq!(object.height(), -80);
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn test_missing_size_is_fatal() {
    let err = parse_err("<annotation><objects/></annotation>");
    assert!(err.to_string().contains("missing <size>"));
}

#[test]
fn test_missing_height_is_fatal() {
    let err = parse_err(
        r#"
        <annotation>
          <size><width>500</width></size>
        </annotation>
        "#,
    );
    assert!(err.to_string().contains("missing <height>"));
}

#[test]
fn test_non_numeric_size_is_fatal() {
    let err = parse_err(
        r#"
        <annotation>
          <size><width>wide</width><height>400</height></size>
        </annotation>
        "#,
    );
    assert!(err.to_string().contains("invalid integer `wide`"));
}

#[test]
fn test_malformed_xml_is_fatal() {
    let err = parse_err("<annotation><size>");
    assert_eq!(err.diagnostics().len(), 1);
    assert!(err.diagnostics()[0].severity().is_error());
    assert!(err.to_string().contains("malformed XML"));
}

#[test]
fn test_size_text_is_trimmed() {
    let outcome = parse_ok(
        r#"
        <annotation>
          <size><width> 500 </width><height>
            400
          </height></size>
        </annotation>
        "#,
    );

    assert_eq!(outcome.diagram().size(), (500, 400));
}
