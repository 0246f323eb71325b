//! The in-memory diagram registry.
//!
//! The registry maps diagram names to loaded [`Diagram`]s for the lifetime
//! of an interactive session. Entries are added by explicit load actions
//! and never removed; listing order is insertion order.

use indexmap::IndexMap;
use thiserror::Error;

use crate::annotation::Diagram;

/// Errors produced by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A diagram with the same name is already registered.
    #[error("Diagram `{0}` is already loaded.")]
    DuplicateDiagram(String),
}

/// An ordered mapping from diagram name to [`Diagram`].
///
/// Keys are unique; iteration order is insertion order. The registry is
/// created at session start, owned by the session for its lifetime, and
/// never persisted.
#[derive(Debug, Default)]
pub struct DiagramRegistry {
    diagrams: IndexMap<String, Diagram>,
}

impl DiagramRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a diagram under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDiagram`] if a diagram with the
    /// same name is already registered; the registry is left unchanged.
    pub fn insert(&mut self, diagram: Diagram) -> Result<(), RegistryError> {
        if self.diagrams.contains_key(diagram.name()) {
            return Err(RegistryError::DuplicateDiagram(diagram.name().to_string()));
        }
        self.diagrams.insert(diagram.name().to_string(), diagram);
        Ok(())
    }

    /// Whether a diagram with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.diagrams.contains_key(name)
    }

    /// Look up a diagram by name.
    pub fn get(&self, name: &str) -> Option<&Diagram> {
        self.diagrams.get(name)
    }

    /// Registered names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.diagrams.keys().map(String::as_str)
    }

    /// Registered diagrams, in insertion order.
    pub fn diagrams(&self) -> impl Iterator<Item = &Diagram> {
        self.diagrams.values()
    }

    /// `(name, diagram)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Diagram)> {
        self.diagrams.iter().map(|(name, diagram)| (name.as_str(), diagram))
    }

    /// Number of registered diagrams.
    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }
}
