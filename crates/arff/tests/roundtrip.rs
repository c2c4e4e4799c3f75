//! Round-trip tests: rendering then parsing preserves values.

use arff::{ArffWriter, Row, Value, parse_str};
use proptest::prelude::{Strategy, any, prop, proptest};

/// Render rows with synthesized names and parse the result back.
fn roundtrip(rows: Vec<Vec<Value>>) -> Vec<Vec<Value>> {
    let text = ArffWriter::new().render_to_string(rows).unwrap();
    parse_str(&text)
        .unwrap()
        .into_rows()
        .into_iter()
        .map(Row::into_values)
        .collect()
}

#[test]
fn test_mixed_scalar_roundtrip() {
    let rows = vec![
        vec![Value::text("blonde"), Value::Real(17.2), Value::Integer(1)],
        vec![Value::text("blue"), Value::Real(27.2), Value::Integer(2)],
        vec![Value::text(""), Value::Real(-0.5), Value::Integer(-3)],
    ];
    assert_eq!(roundtrip(rows.clone()), rows);
}

#[test]
fn test_strings_with_commas_and_quotes_roundtrip() {
    let rows = vec![
        vec![Value::text("last, first")],
        vec![Value::text("it's fine")],
        vec![Value::text("both, it's")],
    ];
    assert_eq!(roundtrip(rows.clone()), rows);
}

#[test]
fn test_bool_roundtrips_as_nominal_option() {
    let rows = vec![vec![Value::Bool(true)], vec![Value::Bool(false)]];
    let text = ArffWriter::new().render_to_string(rows).unwrap();

    // Booleans are declared as a two-option nominal, so they read back as
    // the option text.
    assert!(text.contains("@attribute attr0 {True, False}\n"));
    let parsed = parse_str(&text).unwrap();
    assert_eq!(parsed.rows()[0][0], Value::text("True"));
    assert_eq!(parsed.rows()[1][0], Value::text("False"));
}

#[test]
fn test_parsed_nominal_values_survive_rewrite() {
    let text = "@relation diabetics_data
@attribute hair_color {blonde, black, blue}
@attribute age real
@data
blonde, 17.2
blue, 27.2
";
    let first = parse_str(text).unwrap();
    let values: Vec<Vec<Value>> = first
        .into_rows()
        .into_iter()
        .map(Row::into_values)
        .collect();

    // Re-rendering infers `string` for the nominal column; the values are
    // unchanged either way.
    assert_eq!(roundtrip(values.clone()), values);
}

fn row_strategy() -> impl Strategy<Value = Vec<Value>> {
    (
        prop::num::f64::NORMAL,
        any::<i64>(),
        "[a-z0-9]{0,12}",
    )
        .prop_map(|(real, int, text)| {
            vec![Value::Real(real), Value::Integer(int), Value::text(text)]
        })
}

proptest! {
    #[test]
    fn prop_roundtrip_preserves_values(rows in prop::collection::vec(row_strategy(), 1..16)) {
        let back = roundtrip(rows.clone());
        proptest::prop_assert_eq!(back, rows);
    }
}
