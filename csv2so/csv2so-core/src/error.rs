//! Error types for schema parsing and value access.

use thiserror::Error;

/// Failure raised by [`parse_schema`](crate::parse_schema) when the three
/// header lines cannot be turned into a [`Schema`](crate::Schema).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema header requires 3 lines, found {found}")]
    TooFewLines { found: usize },
    #[error(
        "schema header lines disagree on column count (comments: {comments}, names: {names}, types: {types})"
    )]
    ColumnCountMismatch {
        comments: usize,
        names: usize,
        types: usize,
    },
    #[error("unknown column type `{token}` for column `{column}`")]
    UnknownType { token: String, column: String },
}

/// Type token that does not name any [`ColumnType`](crate::ColumnType).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown column type `{token}`")]
pub struct UnknownTypeName {
    pub token: String,
}

/// Requested a [`Value`](crate::Value) as a type it does not hold.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected {expected} value, got {actual}")]
pub struct ValueTypeError {
    expected: String,
    actual: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
