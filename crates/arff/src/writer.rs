//! Attribute-relation file writer.
//!
//! Infers a schema from the first row of native values and renders a
//! conforming header followed by the data section, one line per pull.

use crate::error::{ArffError, Result};
use crate::header::{DATA_KEYWORD, build_attribute_line, build_relation_line};
use crate::types::{Attribute, AttrType, Schema, Value};

/// Default relation name when the caller supplies none.
const DEFAULT_RELATION: &str = "untitled";

/// Builder for rendering rows of native values as attribute-relation text.
#[derive(Debug, Clone)]
pub struct ArffWriter {
    relation: String,
    attribute_names: Option<Vec<String>>,
}

impl Default for ArffWriter {
    fn default() -> Self {
        Self {
            relation: DEFAULT_RELATION.to_string(),
            attribute_names: None,
        }
    }
}

impl ArffWriter {
    /// Create a writer with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relation name (default: `untitled`).
    #[must_use]
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }

    /// Set the attribute names.
    ///
    /// When omitted, names are synthesized as `attr0, attr1, ...` in
    /// positional order.
    #[must_use]
    pub fn with_attribute_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Render rows as a lazy line sequence.
    ///
    /// Pulls the first row to infer one attribute type per column; an
    /// empty input has nothing to infer from and fails with `EmptyInput`.
    /// The returned sequence yields the relation line, the attribute
    /// declarations, the data marker, then every row (the first included)
    /// rendered through the same per-column rules. A row whose length
    /// differs from the first fails that pull with `RowArityMismatch`.
    pub fn render_lines<I>(self, rows: I) -> Result<RenderLines<I::IntoIter>>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        let mut rows = rows.into_iter();
        let first = rows.next().ok_or(ArffError::EmptyInput)?;

        let names: Vec<String> = match self.attribute_names {
            Some(names) => {
                if names.len() != first.len() {
                    return Err(ArffError::AttributeNameCount {
                        expected: first.len(),
                        actual: names.len(),
                    });
                }
                names
            }
            None => (0..first.len()).map(|i| format!("attr{i}")).collect(),
        };

        let attributes = names
            .into_iter()
            .zip(&first)
            .map(|(name, value)| Attribute::new(name, AttrType::infer(value)))
            .collect();
        let schema = Schema::new(self.relation, attributes);
        tracing::debug!(
            relation = %schema.relation,
            attributes = schema.arity(),
            "inferred schema from first row"
        );

        Ok(RenderLines {
            schema,
            stage: Stage::Relation,
            first: Some(first),
            rows,
        })
    }

    /// Render rows eagerly into a single string, one line per `\n`.
    pub fn render_to_string<I>(self, rows: I) -> Result<String>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        let mut out = String::new();
        for line in self.render_lines(rows)? {
            out.push_str(&line?);
            out.push('\n');
        }
        Ok(out)
    }
}

enum Stage {
    Relation,
    Attributes(usize),
    Rows,
}

/// Lazy line sequence produced by [`ArffWriter::render_lines`].
pub struct RenderLines<I>
where
    I: Iterator<Item = Vec<Value>>,
{
    schema: Schema,
    stage: Stage,
    first: Option<Vec<Value>>,
    rows: I,
}

impl<I> RenderLines<I>
where
    I: Iterator<Item = Vec<Value>>,
{
    /// The schema inferred from the first row.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn render_row(&self, row: &[Value]) -> Result<String> {
        if row.len() != self.schema.arity() {
            return Err(ArffError::RowArityMismatch {
                expected: self.schema.arity(),
                actual: row.len(),
            });
        }
        let fields: Vec<String> = self
            .schema
            .attributes
            .iter()
            .zip(row)
            .map(|(attribute, value)| attribute.render(value))
            .collect();
        Ok(fields.join(","))
    }
}

impl<I> Iterator for RenderLines<I>
where
    I: Iterator<Item = Vec<Value>>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Relation => {
                self.stage = Stage::Attributes(0);
                Some(Ok(build_relation_line(&self.schema.relation)))
            }
            Stage::Attributes(index) => {
                if let Some(attribute) = self.schema.attributes.get(index) {
                    self.stage = Stage::Attributes(index + 1);
                    Some(Ok(build_attribute_line(attribute)))
                } else {
                    self.stage = Stage::Rows;
                    Some(Ok(DATA_KEYWORD.to_string()))
                }
            }
            Stage::Rows => {
                let row = self.first.take().or_else(|| self.rows.next())?;
                Some(self.render_row(&row))
            }
        }
    }
}
