//! Sextant - an interactive browser for XML diagram annotations.
//!
//! Loading, querying, and aggregation for diagram annotation files. Each
//! file describes one diagram (a pixel size plus zero or more labeled
//! bounding boxes); loaded diagrams are held in an in-memory registry for
//! the lifetime of a [`Session`].

pub mod config;

mod error;

pub use sextant_core::{annotation, query, registry};
pub use sextant_parser::{ParseOutcome, parse_file, parse_str};

pub use error::SextantError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use sextant_core::{
    annotation::Diagram,
    query::{DimensionQuery, Statistics},
    registry::{DiagramRegistry, RegistryError},
};
use sextant_parser::error::Diagnostic;

use config::AppConfig;

/// A session over one annotation directory.
///
/// The session owns the diagram registry for its lifetime and provides the
/// operations a command surface needs: discovering annotation files,
/// loading them, and running queries. Nothing is persisted; the registry
/// lives until the session is dropped.
///
/// # Examples
///
/// ```rust,no_run
/// use sextant::{Session, config::AppConfig};
///
/// let mut session = Session::new("annotations", AppConfig::default());
///
/// let loaded = session.load("a.xml").expect("Failed to load");
/// println!("loaded `{}` with {} objects", loaded.name(), loaded.object_count());
///
/// for name in session.search_by_type("actor") {
///     println!("{name}");
/// }
/// ```
#[derive(Debug)]
pub struct Session {
    folder: PathBuf,
    config: AppConfig,
    registry: DiagramRegistry,
}

/// The result of successfully loading one annotation file.
#[derive(Debug)]
pub struct LoadOutcome {
    name: String,
    object_count: usize,
    diagnostics: Vec<Diagnostic>,
}

impl LoadOutcome {
    /// The registered diagram name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of objects in the loaded diagram.
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// Warnings for objects that were skipped during parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl Session {
    /// Create a session over an annotation directory.
    ///
    /// # Arguments
    ///
    /// * `folder` - Directory the session reads annotation files from
    /// * `config` - Application configuration (annotation file extension)
    pub fn new(folder: impl Into<PathBuf>, config: AppConfig) -> Self {
        Self {
            folder: folder.into(),
            config,
            registry: DiagramRegistry::new(),
        }
    }

    /// The directory this session reads annotation files from.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// The session configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The registry of loaded diagrams.
    pub fn registry(&self) -> &DiagramRegistry {
        &self.registry
    }

    /// List annotation file names in the session folder, sorted by name.
    ///
    /// Only files carrying the configured extension (case-insensitive)
    /// are returned.
    ///
    /// # Errors
    ///
    /// Returns `SextantError::Io` when the directory cannot be read.
    pub fn annotation_files(&self) -> Result<Vec<String>, SextantError> {
        let mut files: Vec<String> = fs::read_dir(&self.folder)?
            .flatten()
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| self.is_annotation_file(name))
            .collect();
        files.sort();

        debug!(folder = self.folder.display().to_string(), files = files.len(); "listed annotation files");
        Ok(files)
    }

    /// Load `file_name` from the session folder into the registry.
    ///
    /// The diagram is registered under the file's base name with the
    /// extension stripped. Duplicates are rejected by that normalized name
    /// before the filesystem is touched.
    ///
    /// # Errors
    ///
    /// - `SextantError::InvalidFileName` - the name lacks the configured
    ///   extension
    /// - `SextantError::Registry` - a diagram with this name is already
    ///   loaded
    /// - `SextantError::FileNotFound` - no such file in the session folder
    /// - `SextantError::Parse` - the file could not be parsed
    ///
    /// The registry is unchanged on every error path.
    pub fn load(&mut self, file_name: &str) -> Result<LoadOutcome, SextantError> {
        if !self.is_annotation_file(file_name) {
            return Err(SextantError::InvalidFileName(file_name.to_string()));
        }

        let name = self.normalize_name(file_name);
        if self.registry.contains(name) {
            return Err(RegistryError::DuplicateDiagram(name.to_string()).into());
        }

        let path = self.folder.join(file_name);
        if !path.is_file() {
            return Err(SextantError::FileNotFound(file_name.to_string()));
        }

        let (diagram, diagnostics) = sextant_parser::parse_file(&path)?.into_parts();
        let name = diagram.name().to_string();
        let object_count = diagram.objects().len();
        self.registry.insert(diagram)?;

        info!(diagram = name, objects = object_count, skipped = diagnostics.len(); "diagram loaded");
        Ok(LoadOutcome {
            name,
            object_count,
            diagnostics,
        })
    }

    /// Look up a loaded diagram, stripping the configured extension from
    /// the given name first (`a.xml` and `a` refer to the same diagram).
    pub fn diagram(&self, name: &str) -> Option<&Diagram> {
        self.registry.get(self.normalize_name(name))
    }

    /// Diagrams containing at least one object of the given type,
    /// case-insensitively, each listed once in load order.
    pub fn search_by_type(&self, type_name: &str) -> Vec<&str> {
        sextant_core::query::search_by_type(&self.registry, type_name)
    }

    /// Diagrams containing at least one object satisfying `query`, each
    /// listed once in load order.
    pub fn search_by_dimension(&self, query: &DimensionQuery) -> Vec<&str> {
        sextant_core::query::search_by_dimension(&self.registry, query)
    }

    /// Aggregate statistics over all loaded diagrams, or `None` when the
    /// registry is empty.
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::collect(&self.registry)
    }

    /// Strip the configured annotation extension from a name, if present.
    pub fn normalize_name<'a>(&self, name: &'a str) -> &'a str {
        match name.rsplit_once('.') {
            Some((stem, ext))
                if !stem.is_empty()
                    && ext.eq_ignore_ascii_case(self.config.files().extension()) =>
            {
                stem
            }
            _ => name,
        }
    }

    fn is_annotation_file(&self, name: &str) -> bool {
        matches!(
            name.rsplit_once('.'),
            Some((stem, ext))
                if !stem.is_empty() && ext.eq_ignore_ascii_case(self.config.files().extension())
        )
    }
}
