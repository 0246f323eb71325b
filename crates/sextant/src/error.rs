//! Error types for Sextant operations.
//!
//! This module provides the main error type [`SextantError`] which wraps
//! the error conditions that can occur while loading and querying
//! annotation files.

use std::io;

use thiserror::Error;

use sextant_core::registry::RegistryError;
use sextant_parser::error::ParseError;

/// The main error type for Sextant operations.
///
/// Load failures are always scoped to one file: a [`SextantError`] from
/// [`Session::load`](crate::Session::load) leaves the registry unchanged.
#[derive(Debug, Error)]
pub enum SextantError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("`{0}` is not an annotation file name")]
    InvalidFileName(String),

    #[error("file `{0}` not found")]
    FileNotFound(String),
}
