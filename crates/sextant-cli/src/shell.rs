//! The interactive menu shell.
//!
//! This module drives a [`Session`] through a numbered text menu: one
//! trimmed line of input per action, dispatched to the session, results
//! printed to the output stream. The shell is generic over its input and
//! output streams so tests can script a whole session.
//!
//! Everything here is presentation: file discovery, duplicate rejection,
//! and name normalization live in [`Session`], so this layer can be
//! replaced by any other command surface.

use std::io::{self, BufRead, Write};

use log::debug;

use sextant::{Session, SextantError, query::DimensionQuery};

const MENU: &str = "\n\n
-------------------------------------
1. List Current Files
2. List Diagrams
3. Load File
4. Display Diagram Info
5. Search
  5.1. Find by type
  5.2. Find by dimension
6. Statistics
7. Exit
";

/// The interactive shell over one [`Session`].
pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading commands from `input` and printing to
    /// `output`.
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Run the menu loop until a confirmed exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Ready to process diagrams from: {}",
            self.session.folder().display()
        )?;

        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            debug!(choice = choice.as_str(); "menu selection");
            match choice.as_str() {
                "1" => self.list_files()?,
                "2" => self.list_loaded()?,
                "3" => self.load_file()?,
                "4" => self.display_diagram()?,
                "5" | "5.1" => self.search_by_type()?,
                "5.2" => self.search_by_dimension()?,
                "6" => self.show_statistics()?,
                "7" => {
                    if self.confirm_exit()? {
                        break;
                    }
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        Ok(())
    }

    /// Print `text` and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn list_files(&mut self) -> io::Result<()> {
        let files = match self.session.annotation_files() {
            Ok(files) => files,
            Err(err) => {
                writeln!(self.output, "An error occurred while listing files: {err}")?;
                return Ok(());
            }
        };

        if files.is_empty() {
            writeln!(self.output, "No annotation files found in the folder.")?;
        } else {
            writeln!(self.output, "Annotation files found:")?;
            for file in files {
                writeln!(self.output, "- {file}")?;
            }
        }
        Ok(())
    }

    fn list_loaded(&mut self) -> io::Result<()> {
        let registry = self.session.registry();
        if registry.is_empty() {
            writeln!(self.output, "0 diagrams loaded.")?;
        } else {
            let names: Vec<&str> = registry.names().collect();
            writeln!(
                self.output,
                "{} diagram(s) loaded: {}",
                names.len(),
                names.join(", ")
            )?;
        }
        Ok(())
    }

    fn load_file(&mut self) -> io::Result<()> {
        let Some(file_name) = self.prompt("Enter the filename to load: ")? else {
            return Ok(());
        };

        match self.session.load(&file_name) {
            Ok(loaded) => {
                for diagnostic in loaded.diagnostics() {
                    writeln!(self.output, "{diagnostic}")?;
                }
                writeln!(
                    self.output,
                    "Diagram `{}` was successfully loaded.",
                    loaded.name()
                )?;
            }
            Err(SextantError::InvalidFileName(_) | SextantError::FileNotFound(_)) => {
                writeln!(
                    self.output,
                    "Error loading file '{file_name}'. Invalid filename or file not found."
                )?;
            }
            Err(err @ SextantError::Registry(_)) => {
                writeln!(self.output, "{err}")?;
            }
            Err(err) => {
                writeln!(
                    self.output,
                    "Error loading diagram `{}`: {err}",
                    self.session.normalize_name(&file_name)
                )?;
            }
        }
        Ok(())
    }

    fn display_diagram(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter diagram name: ")? else {
            return Ok(());
        };

        match self.session.diagram(&name) {
            Some(diagram) => writeln!(self.output, "{diagram}")?,
            None => writeln!(
                self.output,
                "Diagram '{name}' not found or not loaded yet."
            )?,
        }
        Ok(())
    }

    fn search_by_type(&mut self) -> io::Result<()> {
        let Some(type_name) = self.prompt("Enter the diagram type: ")? else {
            return Ok(());
        };
        if type_name.is_empty() {
            writeln!(self.output, "No type entered.")?;
            return Ok(());
        }

        let matches: Vec<String> = self
            .session
            .search_by_type(&type_name)
            .into_iter()
            .map(String::from)
            .collect();
        self.print_matches(&matches, "No diagrams found with that type.")
    }

    fn search_by_dimension(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Enter search criteria (press Enter to skip a field):"
        )?;

        let Some(min_width) = self.read_bound("Min width: ")? else {
            return Ok(());
        };
        let Some(max_width) = self.read_bound("Max width: ")? else {
            return Ok(());
        };
        let Some(min_height) = self.read_bound("Min height: ")? else {
            return Ok(());
        };
        let Some(max_height) = self.read_bound("Max height: ")? else {
            return Ok(());
        };
        let Some(difficult) = self.prompt("Difficult (yes/no/all): ")? else {
            return Ok(());
        };
        let Some(truncated) = self.prompt("Truncated (yes/no/all): ")? else {
            return Ok(());
        };

        let query = DimensionQuery::new()
            .with_min_width(min_width.unwrap_or(0))
            .with_max_width(max_width)
            .with_min_height(min_height.unwrap_or(0))
            .with_max_height(max_height)
            .with_difficult(parse_flag_filter(&difficult))
            .with_truncated(parse_flag_filter(&truncated));

        let matches: Vec<String> = self
            .session
            .search_by_dimension(&query)
            .into_iter()
            .map(String::from)
            .collect();
        self.print_matches(&matches, "No diagrams found matching the criteria.")
    }

    /// Read one numeric bound. Blank input keeps the default (inner
    /// `None`); the outer `None` aborts the search after bad input or end
    /// of input.
    fn read_bound(&mut self, label: &str) -> io::Result<Option<Option<i64>>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(None));
        }
        match raw.parse::<i64>() {
            Ok(value) => Ok(Some(Some(value))),
            Err(_) => {
                writeln!(self.output, "Invalid numeric input.")?;
                Ok(None)
            }
        }
    }

    fn print_matches(&mut self, matches: &[String], empty_message: &str) -> io::Result<()> {
        if matches.is_empty() {
            writeln!(self.output, "{empty_message}")?;
        } else {
            writeln!(self.output, "Found {} diagram(s):", matches.len())?;
            for name in matches {
                writeln!(self.output, "{name}")?;
            }
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> io::Result<()> {
        match self.session.statistics() {
            Some(statistics) => writeln!(self.output, "{statistics}")?,
            None => writeln!(self.output, "No diagrams loaded.")?,
        }
        Ok(())
    }

    fn confirm_exit(&mut self) -> io::Result<bool> {
        let Some(answer) = self.prompt("Are you sure you want to quit the program (yes/no)? ")?
        else {
            return Ok(true);
        };

        if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            writeln!(self.output, "Good bye.")?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// Parse a tri-state flag filter answer: yes/no keep only matching
/// objects, anything else (including blank and `all`) matches all.
fn parse_flag_filter(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}
