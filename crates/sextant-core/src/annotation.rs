//! Core annotation record types.
//!
//! This module contains the fundamental building blocks of the annotation
//! model:
//! - [`DiagramObject`] - One labeled bounding box within a diagram
//! - [`Diagram`] - One parsed annotation file with its pixel size and objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// A labeled bounding box within a diagram.
///
/// Coordinates are diagram-local pixel values, stored verbatim from the
/// source file. Nothing enforces `xmax >= xmin` or `ymax >= ymin`; an
/// inverted box yields negative derived dimensions, which propagate into
/// queries and statistics unchanged.
///
/// Objects are constructed once during parsing and are immutable
/// afterwards. They are owned exclusively by their parent [`Diagram`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramObject {
    obj_type: String,
    xmin: i64,
    ymin: i64,
    xmax: i64,
    ymax: i64,
    difficult: bool,
    truncated: bool,
}

impl DiagramObject {
    /// Create a new object from its type label, boundary coordinates, and
    /// annotation flags.
    pub fn new(
        obj_type: impl Into<String>,
        xmin: i64,
        ymin: i64,
        xmax: i64,
        ymax: i64,
        difficult: bool,
        truncated: bool,
    ) -> Self {
        Self {
            obj_type: obj_type.into(),
            xmin,
            ymin,
            xmax,
            ymax,
            difficult,
            truncated,
        }
    }

    /// The type label of this object (e.g. `"actor"`, `"class"`).
    pub fn obj_type(&self) -> &str {
        &self.obj_type
    }

    /// Left edge of the boundary.
    pub fn xmin(&self) -> i64 {
        self.xmin
    }

    /// Top edge of the boundary.
    pub fn ymin(&self) -> i64 {
        self.ymin
    }

    /// Right edge of the boundary.
    pub fn xmax(&self) -> i64 {
        self.xmax
    }

    /// Bottom edge of the boundary.
    pub fn ymax(&self) -> i64 {
        self.ymax
    }

    /// Whether the object was marked as difficult to detect.
    pub fn difficult(&self) -> bool {
        self.difficult
    }

    /// Whether the object was marked as truncated by the diagram edge.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Boundary width, `xmax - xmin`. Negative for inverted boxes.
    pub fn width(&self) -> i64 {
        self.xmax - self.xmin
    }

    /// Boundary height, `ymax - ymin`. Negative for inverted boxes.
    pub fn height(&self) -> i64 {
        self.ymax - self.ymin
    }

    /// Boundary area, `width * height`.
    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }
}

impl fmt::Display for DiagramObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Bounds: ({},{}) to ({},{}), Width: {}, Height: {}, Area: {}, Difficult: {}, Truncated: {}",
            self.obj_type,
            self.xmin,
            self.ymin,
            self.xmax,
            self.ymax,
            self.width(),
            self.height(),
            self.area(),
            self.difficult,
            self.truncated
        )
    }
}

/// One parsed annotation file.
///
/// A diagram is identified by its source file's base name (extension
/// stripped), has a known pixel size, and owns zero or more
/// [`DiagramObject`]s in document order. Objects are appended during
/// parsing via [`Diagram::push_object`]; once the parser returns, the
/// value is treated as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    name: String,
    width: i64,
    height: i64,
    objects: Vec<DiagramObject>,
}

impl Diagram {
    /// Create an empty diagram with its name and pixel size.
    pub fn new(name: impl Into<String>, width: i64, height: i64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            objects: Vec::new(),
        }
    }

    /// The diagram name (source file base name without extension).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Diagram width in pixels.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Diagram height in pixels.
    pub fn height(&self) -> i64 {
        self.height
    }

    /// The `(width, height)` pair.
    pub fn size(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    /// Diagram area, `width * height`.
    pub fn area(&self) -> i64 {
        self.width * self.height
    }

    /// The contained objects, in document order.
    pub fn objects(&self) -> &[DiagramObject] {
        &self.objects
    }

    /// Append an object. Used by the parser while building the diagram.
    pub fn push_object(&mut self, object: DiagramObject) {
        self.objects.push(object);
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Diagram: {}\nSize: {}x{} (Area: {})\nObjects:",
            self.name,
            self.width,
            self.height,
            self.area()
        )?;
        if self.objects.is_empty() {
            write!(f, "\n  (no objects found in this diagram)")?;
        } else {
            for object in &self.objects {
                write!(f, "\n  {object}")?;
            }
        }
        Ok(())
    }
}
