//! Configuration types for the Sextant annotation browser.
//!
//! This module provides configuration structures that control how
//! annotation files are discovered and named. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`FilesConfig`] - Controls the annotation file extension used for
//!   listing directories and normalizing diagram names.
//!
//! # Example
//!
//! ```
//! # use sextant::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.files().extension(), "xml");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// File handling configuration section.
    #[serde(default)]
    files: FilesConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified file settings.
    pub fn new(files: FilesConfig) -> Self {
        Self { files }
    }

    /// Returns the file handling configuration.
    pub fn files(&self) -> &FilesConfig {
        &self.files
    }
}

/// Annotation file handling configuration.
///
/// Controls which file extension marks a file as an annotation document.
/// The extension is matched case-insensitively and without a leading dot.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Annotation file extension (default `"xml"`).
    #[serde(default = "default_extension")]
    extension: String,
}

impl FilesConfig {
    /// Creates a new [`FilesConfig`] with the specified extension.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Returns the annotation file extension, without a leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "xml".to_string()
}
