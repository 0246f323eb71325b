//! Sextant Core Types and Queries
//!
//! This crate provides the foundational types for the Sextant annotation
//! browser. It includes:
//!
//! - **Annotations**: The typed record model for diagrams and their labeled
//!   bounding boxes ([`annotation`] module)
//! - **Registry**: The ordered in-memory collection of loaded diagrams
//!   ([`registry`] module)
//! - **Queries**: Search and aggregation over loaded diagrams
//!   ([`query`] module)

pub mod annotation;
pub mod query;
pub mod registry;
