//! Relation schema: the ordered attribute list parsed from a header.

use serde::{Deserialize, Serialize};

use super::Attribute;

/// The schema of one attribute-relation file.
///
/// Built once, either from header declarations (read path) or by type
/// inference over the first row (write path), and shared read-only by
/// every row of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Relation name. Descriptive metadata only, never validated against data.
    pub relation: String,
    /// Attributes in declaration order.
    pub attributes: Vec<Attribute>,
}

impl Schema {
    /// Create a schema.
    pub fn new(relation: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            relation: relation.into(),
            attributes,
        }
    }

    /// Number of attributes, which is also every row's arity.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    /// Position of the named attribute.
    ///
    /// When two attributes share a name, the first declared occurrence
    /// wins.
    #[must_use]
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name == name)
    }

    /// Attribute names in declaration order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|attr| attr.name.as_str())
    }

    /// Whether any attribute name is declared more than once.
    ///
    /// Ambiguous input rather than an error: name lookup resolves to the
    /// first occurrence.
    #[must_use]
    pub fn has_duplicate_names(&self) -> bool {
        let mut seen = std::collections::BTreeSet::new();
        self.attributes.iter().any(|attr| !seen.insert(&attr.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_index_first_wins() {
        let schema = Schema::new(
            "r",
            vec![
                Attribute::real("a"),
                Attribute::integer("b"),
                Attribute::string("a"),
            ],
        );
        assert_eq!(schema.arity(), 3);
        assert_eq!(schema.attribute_index("a"), Some(0));
        assert_eq!(schema.attribute_index("b"), Some(1));
        assert_eq!(schema.attribute_index("c"), None);
        assert!(schema.has_duplicate_names());
    }

    #[test]
    fn test_attribute_names() {
        let schema = Schema::new("r", vec![Attribute::real("x"), Attribute::real("y")]);
        let names: Vec<&str> = schema.attribute_names().collect();
        assert_eq!(names, vec!["x", "y"]);
        assert!(!schema.has_duplicate_names());
    }

    #[test]
    fn test_serde_roundtrip() {
        let schema = Schema::new(
            "r",
            vec![
                Attribute::nominal("hair_color", ["blonde", "blue"]),
                Attribute::real("age"),
            ],
        );
        let json = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }
}
