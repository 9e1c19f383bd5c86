use csv2so_core::{
    default_value, field_text, parse_bool_or_default, parse_float_or_default,
    parse_int_or_default, parse_or_default, ColumnType, Value,
};

#[test]
fn int_tokens_parse_with_surrounding_whitespace() {
    assert_eq!(parse_int_or_default("25"), 25);
    assert_eq!(parse_int_or_default(" 25 "), 25);
    assert_eq!(parse_int_or_default("-3"), -3);
}

#[test]
fn malformed_int_tokens_yield_zero() {
    assert_eq!(parse_int_or_default(""), 0);
    assert_eq!(parse_int_or_default("abc"), 0);
    assert_eq!(parse_int_or_default("2.5"), 0);
    assert_eq!(parse_int_or_default("25x"), 0);
}

#[test]
fn float_tokens_parse_with_surrounding_whitespace() {
    assert_eq!(parse_float_or_default("2.5"), 2.5);
    assert_eq!(parse_float_or_default(" 2.5 "), 2.5);
    assert_eq!(parse_float_or_default("-0.5"), -0.5);
    assert_eq!(parse_float_or_default("3"), 3.0);
}

#[test]
fn malformed_float_tokens_yield_zero() {
    assert_eq!(parse_float_or_default(""), 0.0);
    assert_eq!(parse_float_or_default("abc"), 0.0);
}

#[test]
fn bool_tokens_accept_true_case_insensitively() {
    assert!(parse_bool_or_default("true"));
    assert!(parse_bool_or_default("True"));
    assert!(parse_bool_or_default("TRUE"));
    assert!(parse_bool_or_default(" true "));
}

#[test]
fn every_other_bool_token_is_false() {
    assert!(!parse_bool_or_default("false"));
    assert!(!parse_bool_or_default("1"));
    assert!(!parse_bool_or_default("yes"));
    assert!(!parse_bool_or_default(""));
}

#[test]
fn parse_or_default_dispatches_on_column_type() {
    assert_eq!(parse_or_default(ColumnType::Int, "7"), Value::Int(7));
    assert_eq!(parse_or_default(ColumnType::Float, "1.5"), Value::Float(1.5));
    assert_eq!(parse_or_default(ColumnType::Bool, "true"), Value::Bool(true));
    assert_eq!(
        parse_or_default(ColumnType::String, "taro"),
        Value::string("taro")
    );
}

/// String cells pass through verbatim; only numeric and bool tokens trim.
#[test]
fn string_tokens_keep_surrounding_whitespace() {
    assert_eq!(
        parse_or_default(ColumnType::String, " taro "),
        Value::string(" taro ")
    );
}

#[test]
fn defaults_per_column_type() {
    assert_eq!(default_value(ColumnType::Int), Value::Int(0));
    assert_eq!(default_value(ColumnType::Float), Value::Float(0.0));
    assert_eq!(default_value(ColumnType::Bool), Value::Bool(false));
    assert_eq!(default_value(ColumnType::String), Value::string(""));
}

#[test]
fn field_text_renders_canonical_cells() {
    assert_eq!(field_text(&Value::Int(25)), "25");
    assert_eq!(field_text(&Value::Float(2.5)), "2.5");
    assert_eq!(field_text(&Value::Bool(true)), "True");
    assert_eq!(field_text(&Value::Bool(false)), "False");
    assert_eq!(field_text(&Value::string("taro")), "taro");
}

/// Cell text is not escaped, so a parse/render cycle keeps simple tokens
/// stable but cannot protect embedded commas.
#[test]
fn field_text_keeps_embedded_commas() {
    assert_eq!(field_text(&Value::string("a,b")), "a,b");
}
