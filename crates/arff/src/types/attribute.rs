//! Attribute declarations and per-column parse/render behavior.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArffError, Result};

use super::Value;

/// Declared type of an ARFF attribute.
///
/// The scalar variants map one-to-one onto header type tokens; `Nominal`
/// carries the ordered option set parsed from `{opt1, opt2, ...}` syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "options")]
pub enum AttrType {
    /// Floating-point column, declared as `real` or `numeric`.
    Real,
    /// Whole-number column, declared as `integer`.
    Integer,
    /// Free-text column, declared as `string`. Values are quoted on write.
    String,
    /// Closed enumeration; values must match one of the declared options.
    Nominal(Vec<String>),
}

impl AttrType {
    /// Look up a scalar type token.
    ///
    /// Tokens are matched case-insensitively. Nominal `{...}` syntax is not
    /// a token and must go through [`AttrType::from_declaration`].
    pub fn from_scalar_token(token: &str) -> Result<Self> {
        match token.to_ascii_lowercase().as_str() {
            "numeric" | "real" => Ok(Self::Real),
            "integer" => Ok(Self::Integer),
            "string" => Ok(Self::String),
            _ => Err(ArffError::unrecognized_type(token)),
        }
    }

    /// Parse the type text of an attribute declaration.
    ///
    /// Text beginning with `{` declares a nominal; anything else is looked
    /// up as a scalar token.
    pub fn from_declaration(type_text: &str) -> Result<Self> {
        let text = type_text.trim();
        if text.starts_with('{') {
            Ok(Self::Nominal(parse_nominal_options(text)))
        } else {
            Self::from_scalar_token(text)
        }
    }

    /// Infer the declared type for a native value.
    ///
    /// Booleans become a fixed two-option nominal rather than a scalar.
    #[must_use]
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Real(_) => Self::Real,
            Value::Integer(_) => Self::Integer,
            Value::Text(_) => Self::String,
            Value::Bool(_) => Self::Nominal(vec!["True".to_string(), "False".to_string()]),
        }
    }

    /// Whether this is a nominal type.
    #[must_use]
    pub fn is_nominal(&self) -> bool {
        matches!(self, Self::Nominal(_))
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Integer => write!(f, "integer"),
            Self::String => write!(f, "string"),
            Self::Nominal(options) => write!(f, "{{{}}}", options.join(", ")),
        }
    }
}

/// One declared, named, typed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Declared attribute name.
    pub name: String,
    /// Declared attribute type.
    pub ty: AttrType,
}

impl Attribute {
    /// Create an attribute.
    pub fn new(name: impl Into<String>, ty: AttrType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Create a `real` attribute.
    pub fn real(name: impl Into<String>) -> Self {
        Self::new(name, AttrType::Real)
    }

    /// Create an `integer` attribute.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, AttrType::Integer)
    }

    /// Create a `string` attribute.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttrType::String)
    }

    /// Create a nominal attribute from its option set.
    pub fn nominal<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            AttrType::Nominal(options.into_iter().map(Into::into).collect()),
        )
    }

    /// Parse one raw data field into a native value.
    ///
    /// The field is trimmed of surrounding whitespace and one pair of
    /// matching quote characters before conversion. Nominal membership is
    /// an exact, case-sensitive match against the declared options.
    pub fn parse(&self, raw: &str) -> Result<Value> {
        let field = strip_quotes(raw.trim());
        match &self.ty {
            AttrType::Real => field
                .parse::<f64>()
                .map(Value::Real)
                .map_err(|_| ArffError::invalid_number(field, "real")),
            AttrType::Integer => field
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ArffError::invalid_number(field, "integer")),
            AttrType::String => Ok(Value::Text(field.to_string())),
            AttrType::Nominal(options) => {
                if options.iter().any(|opt| opt == field) {
                    Ok(Value::Text(field.to_string()))
                } else {
                    Err(ArffError::not_in_enumeration(field, options))
                }
            }
        }
    }

    /// Render a native value as format-correct field text.
    ///
    /// Numbers use their canonical text form, free strings are wrapped in
    /// single quotes (embedded quotes doubled), and nominal options are
    /// emitted bare.
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Real(x) => x.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Bool(b) => {
                if *b { "True" } else { "False" }.to_string()
            }
            Value::Text(s) => {
                if self.ty.is_nominal() {
                    s.clone()
                } else {
                    format!("'{}'", s.replace('\'', "''"))
                }
            }
        }
    }
}

/// Parse `{opt1, opt2, ...}` into the ordered option list.
///
/// Options keep declaration order, including duplicates; each is trimmed
/// of whitespace and one pair of quote characters. Empty options are
/// dropped.
fn parse_nominal_options(type_text: &str) -> Vec<String> {
    let inner = type_text.trim();
    let inner = inner.strip_prefix('{').unwrap_or(inner);
    let inner = inner.strip_suffix('}').unwrap_or(inner);
    inner
        .split(',')
        .map(|opt| strip_quotes(opt.trim()))
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip one pair of matching surrounding quote characters.
fn strip_quotes(text: &str) -> &str {
    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
