//! Search and aggregation over loaded diagrams.
//!
//! All operations here are read-only views over a [`DiagramRegistry`]:
//! - [`search_by_type`] - diagrams containing an object with a given type label
//! - [`search_by_dimension`] - diagrams containing an object satisfying a
//!   [`DimensionQuery`]
//! - [`Statistics`] - aggregate counts and min/max figures over the registry
//!
//! Matching diagrams are returned in registry (insertion) order, each at
//! most once.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;
use serde::Serialize;

use crate::{annotation::DiagramObject, registry::DiagramRegistry};

/// Find diagrams containing at least one object whose type label matches
/// `type_name` case-insensitively.
///
/// The first matching object short-circuits the scan of a diagram, so each
/// diagram appears at most once in the result.
pub fn search_by_type<'r>(registry: &'r DiagramRegistry, type_name: &str) -> Vec<&'r str> {
    let needle = type_name.to_lowercase();
    let matches: Vec<&str> = registry
        .iter()
        .filter(|(_, diagram)| {
            diagram
                .objects()
                .iter()
                .any(|object| object.obj_type().to_lowercase() == needle)
        })
        .map(|(name, _)| name)
        .collect();

    debug!(type_name = needle, matches = matches.len(); "type search complete");
    matches
}

/// Criteria for a dimension/flag search.
///
/// Bounds are inclusive. Unset maxima are unbounded, unset minima default
/// to zero, and unset flag filters (`None`) match any object.
///
/// # Example
///
/// ```
/// use sextant_core::query::DimensionQuery;
///
/// let query = DimensionQuery::new()
///     .with_min_width(100)
///     .with_difficult(Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DimensionQuery {
    min_width: i64,
    max_width: Option<i64>,
    min_height: i64,
    max_height: Option<i64>,
    difficult: Option<bool>,
    truncated: Option<bool>,
}

impl DimensionQuery {
    /// Create a query matching every object: zero minima, unbounded maxima,
    /// no flag filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive minimum object width.
    pub fn with_min_width(mut self, min_width: i64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the inclusive maximum object width; `None` is unbounded.
    pub fn with_max_width(mut self, max_width: Option<i64>) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the inclusive minimum object height.
    pub fn with_min_height(mut self, min_height: i64) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set the inclusive maximum object height; `None` is unbounded.
    pub fn with_max_height(mut self, max_height: Option<i64>) -> Self {
        self.max_height = max_height;
        self
    }

    /// Require the `difficult` flag to equal `difficult`; `None` matches all.
    pub fn with_difficult(mut self, difficult: Option<bool>) -> Self {
        self.difficult = difficult;
        self
    }

    /// Require the `truncated` flag to equal `truncated`; `None` matches all.
    pub fn with_truncated(mut self, truncated: Option<bool>) -> Self {
        self.truncated = truncated;
        self
    }

    /// Whether an object satisfies every criterion of this query.
    pub fn matches(&self, object: &DiagramObject) -> bool {
        self.min_width <= object.width()
            && self.max_width.is_none_or(|max| object.width() <= max)
            && self.min_height <= object.height()
            && self.max_height.is_none_or(|max| object.height() <= max)
            && self.difficult.is_none_or(|want| object.difficult() == want)
            && self.truncated.is_none_or(|want| object.truncated() == want)
    }
}

/// Find diagrams containing at least one object satisfying `query`.
///
/// Each diagram appears at most once in the result regardless of how many
/// of its objects match.
pub fn search_by_dimension<'r>(
    registry: &'r DiagramRegistry,
    query: &DimensionQuery,
) -> Vec<&'r str> {
    let matches: Vec<&str> = registry
        .iter()
        .filter(|(_, diagram)| diagram.objects().iter().any(|object| query.matches(object)))
        .map(|(name, _)| name)
        .collect();

    debug!(query:? = query, matches = matches.len(); "dimension search complete");
    matches
}

/// Aggregate statistics over every loaded diagram.
///
/// Min/max pairs are `None` when their source collection is empty (for
/// example, object area when no diagram contains any object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    diagram_count: usize,
    object_count: usize,
    object_types: Vec<String>,
    diagram_width: Option<(i64, i64)>,
    diagram_height: Option<(i64, i64)>,
    object_area: Option<(i64, i64)>,
}

impl Statistics {
    /// Compute statistics over the registry.
    ///
    /// Returns `None` when no diagrams are loaded, so callers can report
    /// that case distinctly instead of printing zeroed figures.
    pub fn collect(registry: &DiagramRegistry) -> Option<Self> {
        if registry.is_empty() {
            return None;
        }

        let mut object_count = 0;
        let mut object_types = BTreeSet::new();
        let mut object_area = None;

        for diagram in registry.diagrams() {
            for object in diagram.objects() {
                object_count += 1;
                object_types.insert(object.obj_type().to_string());
                object_area = fold_min_max(object_area, object.area());
            }
        }

        let diagram_width = min_max(registry.diagrams().map(|d| d.width()));
        let diagram_height = min_max(registry.diagrams().map(|d| d.height()));

        debug!(diagrams = registry.len(), objects = object_count; "statistics collected");

        Some(Self {
            diagram_count: registry.len(),
            object_count,
            object_types: object_types.into_iter().collect(),
            diagram_width,
            diagram_height,
            object_area,
        })
    }

    /// Number of loaded diagrams.
    pub fn diagram_count(&self) -> usize {
        self.diagram_count
    }

    /// Total number of objects across all diagrams.
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// Distinct object type labels, alphabetically ordered.
    pub fn object_types(&self) -> &[String] {
        &self.object_types
    }

    /// `(min, max)` diagram width, `None` when no diagrams contribute.
    pub fn diagram_width(&self) -> Option<(i64, i64)> {
        self.diagram_width
    }

    /// `(min, max)` diagram height, `None` when no diagrams contribute.
    pub fn diagram_height(&self) -> Option<(i64, i64)> {
        self.diagram_height
    }

    /// `(min, max)` object area, `None` when no objects are loaded.
    pub fn object_area(&self) -> Option<(i64, i64)> {
        self.object_area
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--- Statistics ---")?;
        write!(f, "\nNumber of loaded diagrams: {}", self.diagram_count)?;
        write!(f, "\nTotal number of objects: {}", self.object_count)?;
        if self.object_types.is_empty() {
            write!(f, "\nDiagram object types: None")?;
        } else {
            write!(f, "\nDiagram object types: {}", self.object_types.join(", "))?;
        }
        if let Some((min, max)) = self.diagram_width {
            write!(f, "\nMinimum diagram width: {min}")?;
            write!(f, "\nMaximum diagram width: {max}")?;
        }
        if let Some((min, max)) = self.diagram_height {
            write!(f, "\nMinimum diagram height: {min}")?;
            write!(f, "\nMaximum diagram height: {max}")?;
        }
        if let Some((min, max)) = self.object_area {
            write!(f, "\nMinimum object area: {min}")?;
            write!(f, "\nMaximum object area: {max}")?;
        }
        Ok(())
    }
}

fn min_max(values: impl Iterator<Item = i64>) -> Option<(i64, i64)> {
    values.fold(None, fold_min_max)
}

fn fold_min_max(acc: Option<(i64, i64)>, value: i64) -> Option<(i64, i64)> {
    match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    }
}
