//! Core types for attribute-relation data.
//!
//! This module provides the data structures shared by the read and write
//! paths: native values, attribute declarations, schemas, rows, and
//! options.

mod attribute;
mod dataset;
mod options;
mod row;
mod schema;
mod value;

pub use attribute::{AttrType, Attribute};
pub use dataset::ArffDataset;
pub use options::ReaderOptions;
pub use row::Row;
pub use schema::Schema;
pub use value::Value;
