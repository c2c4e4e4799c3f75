//! One parsed data row.

use std::ops::Index;
use std::sync::Arc;

use crate::error::{ArffError, Result};

use super::{Schema, Value};

/// One schema-conformant, ordered tuple of typed values.
///
/// Immutable after construction. Positional access, name-based access,
/// and ordered iteration all read the same underlying value sequence.
#[derive(Debug, Clone)]
pub struct Row {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl Row {
    pub(crate) fn new(schema: Arc<Schema>, values: Vec<Value>) -> Self {
        Self { schema, values }
    }

    /// The schema this row was parsed against.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of values; always equals the schema's arity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a position.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or(ArffError::IndexOutOfRange {
            index,
            arity: self.values.len(),
        })
    }

    /// Value of the named attribute.
    ///
    /// When the schema declares the name twice, the first occurrence wins.
    pub fn by_name(&self, name: &str) -> Result<&Value> {
        let index = self
            .schema
            .attribute_index(name)
            .ok_or_else(|| ArffError::unknown_attribute_name(name))?;
        Ok(&self.values[index])
    }

    /// Values in declaration order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the row, yielding its values in declaration order.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl Index<usize> for Row {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attribute;

    fn sample_row() -> Row {
        let schema = Arc::new(Schema::new(
            "diabetics_data",
            vec![
                Attribute::nominal("hair_color", ["blonde", "black", "blue"]),
                Attribute::real("age"),
                Attribute::integer("patno"),
            ],
        ));
        Row::new(
            schema,
            vec![Value::text("blonde"), Value::Real(17.2), Value::Integer(1)],
        )
    }

    #[test]
    fn test_access_modes_agree() {
        let row = sample_row();
        assert_eq!(row.len(), 3);
        assert_eq!(row.get(1).unwrap(), &Value::Real(17.2));
        assert_eq!(row.by_name("age").unwrap(), &Value::Real(17.2));
        assert_eq!(row[1], Value::Real(17.2));
        let ordered: Vec<&Value> = row.into_iter().collect();
        assert_eq!(ordered[0], &Value::text("blonde"));
        assert_eq!(ordered.len(), 3);
    }

    #[test]
    fn test_access_errors() {
        let row = sample_row();
        assert!(matches!(
            row.get(3),
            Err(ArffError::IndexOutOfRange { index: 3, arity: 3 })
        ));
        assert!(matches!(
            row.by_name("height"),
            Err(ArffError::UnknownAttributeName { .. })
        ));
    }

    #[test]
    fn test_duplicate_name_resolves_to_first() {
        let schema = Arc::new(Schema::new(
            "r",
            vec![Attribute::integer("x"), Attribute::integer("x")],
        ));
        let row = Row::new(schema, vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(row.by_name("x").unwrap(), &Value::Integer(1));
    }
}
