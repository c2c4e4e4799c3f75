//! Header line parsing and building.
//!
//! An attribute-relation file opens with a header section:
//!
//! ```text
//! % optional comments
//! @relation <name>
//! @attribute <name> <type>
//! ...
//! @data
//! ```
//!
//! Keyword matching is case-insensitive on the line prefix. Header lines
//! that match no keyword are skipped, which keeps this reader working
//! against files written by newer tools.

use crate::error::{ArffError, Result};
use crate::types::{Attribute, AttrType};

/// Comment marker; a line whose first non-space character is this is ignored.
pub const COMMENT_CHAR: char = '%';

/// Relation declaration keyword.
pub const RELATION_KEYWORD: &str = "@relation";

/// Attribute declaration keyword.
pub const ATTRIBUTE_KEYWORD: &str = "@attribute";

/// Data marker keyword; ends the header section.
pub const DATA_KEYWORD: &str = "@data";

/// Whether a line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_CHAR)
}

/// Whether a line's prefix matches a header keyword, case-insensitively.
pub(crate) fn matches_keyword(line: &str, keyword: &str) -> bool {
    line.trim_start()
        .get(..keyword.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
}

/// Extract the relation name: the second whitespace-separated token.
pub(crate) fn parse_relation_line(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)
}

/// Parse an `@attribute <name> <type>` line.
///
/// The line must split into exactly three whitespace-separated parts; the
/// type text runs to the end of the line so nominal option lists may
/// contain spaces.
pub(crate) fn parse_attribute_line(line: &str, line_no: usize) -> Result<Attribute> {
    let (name, type_text) = split_declaration(line)
        .ok_or(ArffError::MalformedAttributeDeclaration { line: line_no })?;
    let ty = AttrType::from_declaration(type_text)?;
    Ok(Attribute::new(name, ty))
}

/// Split a declaration line into (name, type-text), dropping the keyword.
fn split_declaration(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().split_once(char::is_whitespace)?.1.trim_start();
    let (name, type_text) = rest.split_once(char::is_whitespace)?;
    let type_text = type_text.trim();
    if name.is_empty() || type_text.is_empty() {
        return None;
    }
    Some((name, type_text))
}

/// Build a `@relation` line.
pub(crate) fn build_relation_line(relation: &str) -> String {
    format!("{RELATION_KEYWORD} {relation}")
}

/// Build an `@attribute` line.
pub(crate) fn build_attribute_line(attribute: &Attribute) -> String {
    format!("{ATTRIBUTE_KEYWORD} {} {}", attribute.name, attribute.ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_detection() {
        assert!(is_comment("% a comment"));
        assert!(is_comment("  % indented"));
        assert!(!is_comment("@data"));
        assert!(!is_comment("blonde, 17.2, 1"));
    }

    #[test]
    fn test_keyword_matching() {
        assert!(matches_keyword("@relation diabetics_data", RELATION_KEYWORD));
        assert!(matches_keyword("@RELATION x", RELATION_KEYWORD));
        assert!(matches_keyword("@Data", DATA_KEYWORD));
        assert!(!matches_keyword("@attribute age real", RELATION_KEYWORD));
        assert!(!matches_keyword("", DATA_KEYWORD));
    }

    #[test]
    fn test_parse_relation_line() {
        assert_eq!(parse_relation_line("@relation weather"), Some("weather"));
        assert_eq!(parse_relation_line("@relation"), None);
    }

    #[test]
    fn test_parse_attribute_line() {
        let attr = parse_attribute_line("@attribute age real", 2).unwrap();
        assert_eq!(attr.name, "age");
        assert_eq!(attr.ty, AttrType::Real);

        let attr =
            parse_attribute_line("@attribute hair_color {blonde, black, blue}", 3).unwrap();
        assert_eq!(attr.name, "hair_color");
        assert_eq!(
            attr.ty,
            AttrType::Nominal(vec![
                "blonde".to_string(),
                "black".to_string(),
                "blue".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_attribute_line_errors() {
        assert!(matches!(
            parse_attribute_line("@attribute age", 4),
            Err(ArffError::MalformedAttributeDeclaration { line: 4 })
        ));
        assert!(matches!(
            parse_attribute_line("@attribute when date", 5),
            Err(ArffError::UnrecognizedType { .. })
        ));
    }

    #[test]
    fn test_build_lines() {
        assert_eq!(build_relation_line("untitled"), "@relation untitled");
        assert_eq!(
            build_attribute_line(&Attribute::real("attr1")),
            "@attribute attr1 real"
        );
        assert_eq!(
            build_attribute_line(&Attribute::nominal("b", ["True", "False"])),
            "@attribute b {True, False}"
        );
    }
}
