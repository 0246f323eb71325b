//! # Sextant Parser
//!
//! Parser for Sextant XML annotation files. This crate turns one annotation
//! document into the typed record model from [`sextant_core`].
//!
//! ## Usage
//!
//! ```
//! use sextant_parser::{error::ParseError, parse_str};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <annotation>
//!           <size><width>500</width><height>400</height></size>
//!           <objects>
//!             <object>
//!               <type>actor</type>
//!               <boundary xmin="10" ymin="10" xmax="60" ymax="90"/>
//!             </object>
//!           </objects>
//!         </annotation>
//!     "#;
//!
//!     let outcome = parse_str(source, "a")?;
//!     assert_eq!(outcome.diagram().objects().len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! A malformed `<object>` entry never fails the whole file; it is skipped
//! and reported as a warning in [`ParseOutcome::diagnostics`].

pub mod error;

mod parser;
#[cfg(test)]
mod parser_tests;

pub use parser::{ParseOutcome, parse_file, parse_str};
