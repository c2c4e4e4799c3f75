//! Eagerly parsed dataset container.

use std::ops::Index;
use std::sync::Arc;

use super::{Row, Schema};

/// A fully parsed attribute-relation file: schema plus all rows.
///
/// Produced by [`crate::parse_str`]; callers that want lazy row access use
/// [`crate::ArffReader`] directly.
#[derive(Debug, Clone)]
pub struct ArffDataset {
    schema: Arc<Schema>,
    rows: Vec<Row>,
}

impl ArffDataset {
    pub(crate) fn new(schema: Arc<Schema>, rows: Vec<Row>) -> Self {
        Self { schema, rows }
    }

    /// The parsed schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Relation name from the header.
    #[must_use]
    pub fn relation(&self) -> &str {
        &self.schema.relation
    }

    /// Parsed rows in input order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of parsed rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether the data section was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the dataset, yielding its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl Index<usize> for ArffDataset {
    type Output = Row;

    fn index(&self, index: usize) -> &Row {
        &self.rows[index]
    }
}
