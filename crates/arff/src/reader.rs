//! Attribute-relation file reader.
//!
//! Consumes the header eagerly, then yields one parsed [`Row`] per data
//! line on demand. The underlying line sequence is consumed exactly once
//! and never read ahead of the caller's pulls.

use std::sync::Arc;

use crate::error::{ArffError, Result};
use crate::header::{
    ATTRIBUTE_KEYWORD, DATA_KEYWORD, RELATION_KEYWORD, is_comment, matches_keyword,
    parse_attribute_line, parse_relation_line,
};
use crate::types::{ArffDataset, ReaderOptions, Row, Schema};

/// Lazy attribute-relation reader.
///
/// Constructing the reader parses the header; iterating parses the data
/// section one line per pull. A failed pull yields an error item without
/// corrupting the sequence, so callers wanting partial-failure tolerance
/// can keep pulling.
pub struct ArffReader<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    lines: I,
    line_no: usize,
    options: ReaderOptions,
    schema: Arc<Schema>,
}

impl<I> ArffReader<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Parse the header from a line sequence.
    ///
    /// Consumes lines up to and including the data marker. Unrecognized
    /// header lines are skipped.
    pub fn new(lines: I) -> Result<Self> {
        Self::with_options(lines, ReaderOptions::default())
    }

    /// Parse the header with options.
    pub fn with_options(mut lines: I, options: ReaderOptions) -> Result<Self> {
        let mut line_no = 0usize;
        let mut relation = String::new();
        let mut attributes = Vec::new();

        for line in lines.by_ref() {
            line_no += 1;
            let line = line.as_ref();
            if is_comment(line) {
                continue;
            }
            if matches_keyword(line, DATA_KEYWORD) {
                break;
            }
            if matches_keyword(line, RELATION_KEYWORD) {
                if let Some(name) = parse_relation_line(line) {
                    relation = name.to_string();
                }
            } else if matches_keyword(line, ATTRIBUTE_KEYWORD) {
                attributes.push(parse_attribute_line(line, line_no)?);
            } else if options.strict && !line.trim().is_empty() {
                return Err(ArffError::UnrecognizedHeaderLine { line: line_no });
            }
        }

        let schema = Schema::new(relation, attributes);
        tracing::debug!(
            relation = %schema.relation,
            attributes = schema.arity(),
            "parsed header"
        );

        Ok(Self {
            lines,
            line_no,
            options,
            schema: Arc::new(schema),
        })
    }

    /// The schema parsed from the header.
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The options this reader was built with.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    fn parse_data_line(&self, line: &str) -> Result<Row> {
        let fields = tokenize_fields(line)?;
        if fields.len() != self.schema.arity() {
            return Err(ArffError::RowArityMismatch {
                expected: self.schema.arity(),
                actual: fields.len(),
            });
        }

        let mut values = Vec::with_capacity(fields.len());
        for (attribute, raw) in self.schema.attributes.iter().zip(&fields) {
            let value = attribute.parse(raw).map_err(|source| {
                ArffError::row_parse(self.line_no, attribute.name.as_str(), raw.as_str(), source)
            })?;
            values.push(value);
        }

        Ok(Row::new(Arc::clone(&self.schema), values))
    }
}

impl<I> Iterator for ArffReader<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;
            let line = line.as_ref();
            if line.trim().is_empty() || is_comment(line) {
                continue;
            }
            return Some(self.parse_data_line(line));
        }
    }
}

/// Parse attribute-relation text from a line sequence.
///
/// Returns the lazy reader; the header is parsed eagerly, rows on demand.
pub fn parse_lines<I>(lines: I) -> Result<ArffReader<I::IntoIter>>
where
    I: IntoIterator,
    <I as IntoIterator>::Item: AsRef<str>,
{
    ArffReader::new(lines.into_iter())
}

/// Parse attribute-relation text eagerly.
///
/// Convenience over [`parse_lines`] for callers that want the whole
/// dataset in memory; the first bad row aborts the parse.
pub fn parse_str(text: &str) -> Result<ArffDataset> {
    let mut reader = ArffReader::new(text.lines())?;
    let schema = Arc::clone(reader.schema());
    let rows = reader.by_ref().collect::<Result<Vec<Row>>>()?;
    Ok(ArffDataset::new(schema, rows))
}

/// Split one data line into fields.
///
/// Delegates to a CSV tokenizer: fields are comma-separated, optionally
/// single-quoted, with embedded commas permitted inside quotes and
/// doubled quotes as escapes. Fields are trimmed of surrounding
/// whitespace.
fn tokenize_fields(line: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quote(b'\'')
        .double_quote(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    if reader.read_record(&mut record)? {
        Ok(record.iter().map(str::to_string).collect())
    } else {
        Ok(Vec::new())
    }
}
