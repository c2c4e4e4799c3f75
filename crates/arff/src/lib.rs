//! Attribute-relation (ARFF) text format reader and writer.
//!
//! This crate provides a schema-driven codec for the line-oriented
//! attribute-relation format: a header declaring a relation name and an
//! ordered list of typed attributes, followed by a `@data` section of
//! comma-separated rows.
//!
//! # Features
//!
//! - Numeric (`numeric`/`real`/`integer`), `string`, and nominal
//!   (`{opt1, opt2, ...}`) attribute types with membership validation
//! - Lazy, pull-based row parsing and rendering
//! - Write-path type inference that inverts the read path exactly
//! - Row access by position, by attribute name, and as an ordered sequence
//!
//! # Example
//!
//! ```
//! use arff::{ArffWriter, Value};
//!
//! let text = "@relation diabetics_data
//! @attribute hair_color {blonde, black, blue}
//! @attribute age real
//! @data
//! blonde, 17.2
//! ";
//!
//! let dataset = arff::parse_str(text).unwrap();
//! assert_eq!(dataset.relation(), "diabetics_data");
//! assert_eq!(dataset.rows()[0].by_name("age").unwrap().as_f64(), Some(17.2));
//!
//! let rows = vec![vec![Value::text("blonde"), Value::Real(17.2)]];
//! let rendered = ArffWriter::new()
//!     .with_relation("hair")
//!     .render_to_string(rows)
//!     .unwrap();
//! assert!(rendered.starts_with("@relation hair"));
//! ```
//!
//! Attribute types not in the set above (dates, sparse rows) are out of
//! scope, as is file-handle lifecycle: both paths operate on in-memory
//! line sequences supplied and consumed by the caller.

mod error;
pub mod header;
mod reader;
mod types;
mod writer;

// Re-export error types
pub use error::{ArffError, Result};

// Re-export core types
pub use types::{ArffDataset, AttrType, Attribute, ReaderOptions, Row, Schema, Value};

// Re-export reader functionality
pub use reader::{ArffReader, parse_lines, parse_str};

// Re-export writer functionality
pub use writer::{ArffWriter, RenderLines};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
