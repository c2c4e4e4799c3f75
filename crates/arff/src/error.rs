//! Error types for ARFF parsing and rendering.

use thiserror::Error;

/// Errors that can occur when parsing or rendering ARFF text.
#[derive(Debug, Error)]
pub enum ArffError {
    /// Header declares a type token this codec does not know.
    #[error("unrecognized attribute type: {token}")]
    UnrecognizedType { token: String },

    /// Attribute declaration line has fewer than three parts.
    #[error("malformed attribute declaration on line {line}")]
    MalformedAttributeDeclaration { line: usize },

    /// Header line is neither a comment nor a known declaration (strict mode only).
    #[error("unrecognized header line {line}")]
    UnrecognizedHeaderLine { line: usize },

    /// Value is not one of a nominal attribute's declared options.
    #[error("'{value}' is not in {{{}}}", .options.join(", "))]
    NotInEnumeration {
        value: String,
        options: Vec<String>,
    },

    /// Field text failed numeric conversion.
    #[error("invalid {expected} value: '{value}'")]
    InvalidNumber {
        value: String,
        expected: &'static str,
    },

    /// A data-row field failed its attribute's parse.
    #[error("line {line}, attribute {attribute}: failed to parse '{value}'")]
    RowParse {
        line: usize,
        attribute: String,
        value: String,
        #[source]
        source: Box<ArffError>,
    },

    /// Row length disagrees with the schema's attribute count.
    #[error("row length mismatch: expected {expected}, got {actual}")]
    RowArityMismatch { expected: usize, actual: usize },

    /// Attribute name count disagrees with the first row's arity.
    #[error("attribute name count mismatch: expected {expected}, got {actual}")]
    AttributeNameCount { expected: usize, actual: usize },

    /// Write path was given zero rows, so no schema can be inferred.
    #[error("cannot infer a schema from an empty row sequence")]
    EmptyInput,

    /// Name-based row access with a name the schema does not declare.
    #[error("unknown attribute name: {name}")]
    UnknownAttributeName { name: String },

    /// Positional row access past the row's arity.
    #[error("index {index} out of range for row of {arity} values")]
    IndexOutOfRange { index: usize, arity: usize },

    /// Field tokenization error.
    #[error("field tokenization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for ARFF operations.
pub type Result<T> = std::result::Result<T, ArffError>;

impl ArffError {
    /// Create an UnrecognizedType error.
    pub fn unrecognized_type(token: impl Into<String>) -> Self {
        Self::UnrecognizedType {
            token: token.into(),
        }
    }

    /// Create a NotInEnumeration error.
    pub fn not_in_enumeration(value: impl Into<String>, options: &[String]) -> Self {
        Self::NotInEnumeration {
            value: value.into(),
            options: options.to_vec(),
        }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(value: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidNumber {
            value: value.into(),
            expected,
        }
    }

    /// Create a RowParse error wrapping the per-field cause.
    pub fn row_parse(
        line: usize,
        attribute: impl Into<String>,
        value: impl Into<String>,
        source: ArffError,
    ) -> Self {
        Self::RowParse {
            line,
            attribute: attribute.into(),
            value: value.into(),
            source: Box::new(source),
        }
    }

    /// Create an UnknownAttributeName error.
    pub fn unknown_attribute_name(name: impl Into<String>) -> Self {
        Self::UnknownAttributeName { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArffError::unrecognized_type("date");
        assert_eq!(format!("{err}"), "unrecognized attribute type: date");

        let err = ArffError::not_in_enumeration(
            "green",
            &["blonde".to_string(), "black".to_string(), "blue".to_string()],
        );
        assert_eq!(format!("{err}"), "'green' is not in {blonde, black, blue}");
    }

    #[test]
    fn test_row_parse_source() {
        let cause = ArffError::invalid_number("17.x", "real");
        let err = ArffError::row_parse(6, "age", "17.x", cause);
        assert_eq!(
            format!("{err}"),
            "line 6, attribute age: failed to parse '17.x'"
        );
        let source = std::error::Error::source(&err).expect("wrapped cause");
        assert_eq!(format!("{source}"), "invalid real value: '17.x'");
    }
}
