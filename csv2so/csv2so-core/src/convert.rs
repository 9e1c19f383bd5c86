//! Total token-conversion policy.
//!
//! Sheet data is authored by hand; a malformed cell degrades to the column
//! type's default instead of failing the whole import. The defaults are part
//! of the contract: int and float yield 0, bool yields false, string passes
//! through verbatim. Rendering is the inverse direction and produces the
//! canonical cell text for each value.

use crate::{schema::ColumnType, value::Value};

/// Convert a raw cell token to a typed value, substituting the type's
/// default when the token does not parse. Never fails.
pub fn parse_or_default(ty: ColumnType, token: &str) -> Value {
    match ty {
        ColumnType::Int => Value::Int(parse_int_or_default(token)),
        ColumnType::Float => Value::Float(parse_float_or_default(token)),
        ColumnType::Bool => Value::Bool(parse_bool_or_default(token)),
        ColumnType::String => Value::String(token.to_string()),
    }
}

/// Integer conversion: surrounding whitespace is tolerated, anything that
/// still fails to parse yields 0.
pub fn parse_int_or_default(token: &str) -> i32 {
    token.trim().parse().unwrap_or(0)
}

/// Float conversion: surrounding whitespace is tolerated, anything that
/// still fails to parse yields 0.0.
pub fn parse_float_or_default(token: &str) -> f32 {
    token.trim().parse().unwrap_or(0.0)
}

/// Bool conversion: case-insensitive `true` (after trimming) is true,
/// every other token is false.
pub fn parse_bool_or_default(token: &str) -> bool {
    token.trim().eq_ignore_ascii_case("true")
}

/// The default value a column of this type starts from.
pub fn default_value(ty: ColumnType) -> Value {
    match ty {
        ColumnType::Int => Value::Int(0),
        ColumnType::Float => Value::Float(0.0),
        ColumnType::Bool => Value::Bool(false),
        ColumnType::String => Value::String(String::new()),
    }
}

/// Canonical cell text for a value: shortest decimal form for numbers,
/// `True`/`False` for bools, strings verbatim. No quoting or escaping.
pub fn field_text(value: &Value) -> String {
    match value {
        Value::Int(v) => v.to_string(),
        Value::Float(v) => v.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(v) => v.clone(),
    }
}
