//! CLI logic for the Sextant annotation browser.
//!
//! This module contains the core CLI logic for the Sextant annotation
//! browser: startup validation, configuration loading, and the
//! interactive shell.

pub mod error_adapter;
pub mod shell;

mod args;
mod config;

pub use args::Args;
pub use shell::Shell;

use std::{io, path::Path};

use log::info;

use sextant::{Session, SextantError};

/// Run the Sextant CLI application
///
/// This function validates the annotation directory, loads configuration,
/// and hands control to the interactive shell until the user exits.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SextantError` for:
/// - A folder argument that is not a directory
/// - Configuration loading errors
/// - I/O errors on the terminal streams
pub fn run(args: &Args) -> Result<(), SextantError> {
    let folder = Path::new(&args.folder);
    if !folder.is_dir() {
        return Err(SextantError::Io(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("`{}` is not a valid folder", folder.display()),
        )));
    }

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    info!(folder = args.folder; "Starting interactive session");

    let session = Session::new(folder, app_config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(session, stdin.lock(), stdout.lock());
    shell.run()?;

    info!("Session ended");

    Ok(())
}
