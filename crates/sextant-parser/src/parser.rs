//! XML annotation parsing.
//!
//! This module transforms annotation XML into the typed record model from
//! [`sextant_core::annotation`]. The public entry points are [`parse_file`]
//! and [`parse_str`].

use std::{fs, path::Path};

use log::{debug, warn};
use roxmltree::{Document, Node};

use sextant_core::annotation::{Diagram, DiagramObject};

use crate::error::{Diagnostic, ParseError, Position};

/// The result of a successful parse.
///
/// A file can load successfully while still containing malformed `<object>`
/// entries; those are skipped and reported here as warning diagnostics, in
/// document order.
#[derive(Debug)]
pub struct ParseOutcome {
    diagram: Diagram,
    diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// The parsed diagram.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Warnings for objects that were skipped during parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the outcome, keeping only the diagram.
    pub fn into_diagram(self) -> Diagram {
        self.diagram
    }

    /// Consume the outcome, yielding the diagram and its warnings.
    pub fn into_parts(self) -> (Diagram, Vec<Diagnostic>) {
        (self.diagram, self.diagnostics)
    }
}

/// Parse one annotation file into a [`Diagram`].
///
/// The diagram name is derived from the file's base name with the
/// extension stripped. The file is read in full before parsing, so no
/// handle outlives this call.
///
/// # Errors
///
/// Returns a [`ParseError`] when the file cannot be read, is not
/// well-formed XML, or lacks a `<size>` element with numeric `<width>`
/// and `<height>` children. A malformed `<object>` is not an error; see
/// [`ParseOutcome::diagnostics`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseOutcome, ParseError> {
    let path = path.as_ref();

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            Diagnostic::error(format!(
                "cannot derive a diagram name from `{}`",
                path.display()
            ))
        })?;

    let source = fs::read_to_string(path).map_err(|err| {
        Diagnostic::error(format!("failed to read `{}`: {err}", path.display()))
    })?;

    parse_str(&source, name)
}

/// Parse annotation XML source into a [`Diagram`] named `name`.
///
/// # Errors
///
/// Returns a [`ParseError`] when the source is not well-formed XML or
/// lacks a `<size>` element with numeric `<width>` and `<height>`
/// children.
pub fn parse_str(source: &str, name: &str) -> Result<ParseOutcome, ParseError> {
    let doc = Document::parse(source).map_err(|err| {
        Diagnostic::error(format!("malformed XML: {err}")).with_position(err.pos().into())
    })?;
    let root = doc.root_element();

    let (width, height) = parse_size(&doc, root)?;
    let mut diagram = Diagram::new(name, width, height);
    let mut diagnostics = Vec::new();

    match child_element(root, "objects") {
        None => {
            debug!(diagram = name; "no <objects> container; diagram has no objects");
        }
        Some(container) => {
            for node in container.children().filter(|n| n.has_tag_name("object")) {
                match parse_object(&doc, node) {
                    Ok(object) => diagram.push_object(object),
                    Err(diagnostic) => {
                        warn!(diagram = name, reason = diagnostic.message(); "skipping object");
                        diagnostics.push(diagnostic);
                    }
                }
            }
        }
    }

    debug!(
        diagram = name,
        objects = diagram.objects().len(),
        skipped = diagnostics.len();
        "annotation parsed"
    );

    Ok(ParseOutcome {
        diagram,
        diagnostics,
    })
}

/// Read the required `<size>` element with its integer children.
fn parse_size(doc: &Document<'_>, root: Node<'_, '_>) -> Result<(i64, i64), Diagnostic> {
    let size = child_element(root, "size").ok_or_else(|| {
        Diagnostic::error("missing <size> element").with_position(position_of(doc, root))
    })?;

    let width = int_child(doc, size, "width")?;
    let height = int_child(doc, size, "height")?;
    Ok((width, height))
}

/// Read a required integer child element such as `<width>500</width>`.
fn int_child(doc: &Document<'_>, parent: Node<'_, '_>, tag: &str) -> Result<i64, Diagnostic> {
    let node = child_element(parent, tag).ok_or_else(|| {
        Diagnostic::error(format!("missing <{tag}> in <size>"))
            .with_position(position_of(doc, parent))
    })?;

    let text = node.text().map(str::trim).unwrap_or_default();
    text.parse().map_err(|_| {
        Diagnostic::error(format!("invalid integer `{text}` in <{tag}>"))
            .with_position(position_of(doc, node))
    })
}

/// Build one [`DiagramObject`] from an `<object>` element.
///
/// Any missing or non-numeric required piece yields a warning diagnostic;
/// the caller skips this object and continues with its siblings.
fn parse_object(doc: &Document<'_>, node: Node<'_, '_>) -> Result<DiagramObject, Diagnostic> {
    let type_text = child_element(node, "type")
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|text| !text.is_empty());
    let boundary = child_element(node, "boundary");

    let (Some(obj_type), Some(boundary)) = (type_text, boundary) else {
        return Err(
            Diagnostic::warning("skipping object: missing <type> or <boundary>")
                .with_position(position_of(doc, node)),
        );
    };

    let xmin = boundary_attribute(doc, boundary, "xmin")?;
    let ymin = boundary_attribute(doc, boundary, "ymin")?;
    let xmax = boundary_attribute(doc, boundary, "xmax")?;
    let ymax = boundary_attribute(doc, boundary, "ymax")?;

    let difficult = bool_child(node, "difficult");
    let truncated = bool_child(node, "truncated");

    Ok(DiagramObject::new(
        obj_type, xmin, ymin, xmax, ymax, difficult, truncated,
    ))
}

/// Read one required integer attribute from a `<boundary>` element.
fn boundary_attribute(
    doc: &Document<'_>,
    boundary: Node<'_, '_>,
    name: &str,
) -> Result<i64, Diagnostic> {
    let raw = boundary.attribute(name).ok_or_else(|| {
        Diagnostic::warning(format!("skipping object: missing `{name}` on <boundary>"))
            .with_position(position_of(doc, boundary))
    })?;

    raw.trim().parse().map_err(|_| {
        Diagnostic::warning(format!(
            "skipping object: `{name}` is not an integer (`{raw}`)"
        ))
        .with_position(position_of(doc, boundary))
    })
}

/// Boolean flag children parse leniently: trimmed, case-insensitive
/// `"true"` is `true`; any other text, or an absent element, is `false`.
fn bool_child(parent: Node<'_, '_>, tag: &str) -> bool {
    child_element(parent, tag)
        .and_then(|n| n.text())
        .is_some_and(|text| text.trim().eq_ignore_ascii_case("true"))
}

fn child_element<'a, 'i>(parent: Node<'a, 'i>, tag: &str) -> Option<Node<'a, 'i>> {
    parent
        .children()
        .find(|n| n.is_element() && n.has_tag_name(tag))
}

fn position_of(doc: &Document<'_>, node: Node<'_, '_>) -> Position {
    doc.text_pos_at(node.range().start).into()
}
