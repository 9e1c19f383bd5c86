//! Per-column typed accessors.
//!
//! A [`FieldBinding`] pairs a column name with its declared type and carries
//! the conversions for that column in both directions: raw token to typed
//! value, and typed value back to cell text. Bindings are built once from a
//! schema and reused for every row, so row processing never looks anything
//! up by name.

use crate::{
    convert::{default_value, field_text, parse_or_default},
    schema::{Column, ColumnType, Schema},
    value::Value,
};

/// Typed setter/getter pair for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    pub name: String,
    pub ty: ColumnType,
}

impl FieldBinding {
    pub fn for_column(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            ty: column.ty,
        }
    }

    /// Setter direction: raw cell token to a value of this column's type.
    /// Total; see the conversion policy in [`crate::parse_or_default`].
    pub fn parse_token(&self, token: &str) -> Value {
        parse_or_default(self.ty, token)
    }

    /// Getter direction: typed value to canonical cell text.
    pub fn render(&self, value: &Value) -> String {
        field_text(value)
    }

    /// The value a field of this column starts from.
    pub fn default(&self) -> Value {
        default_value(self.ty)
    }
}

impl Schema {
    /// Build the bindings for every column, in declaration order.
    pub fn bindings(&self) -> Vec<FieldBinding> {
        self.iter().map(FieldBinding::for_column).collect()
    }
}
