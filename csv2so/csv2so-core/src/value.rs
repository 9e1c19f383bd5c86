//! Typed field values carried by records.

use crate::{error::ValueTypeError, schema::ColumnType};

/// Value held by one record field.
/// One variant per [`ColumnType`]; conversions are explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Bool(bool),
    String(String),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// The column type this value satisfies.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Int(_) => ColumnType::Int,
            Value::Float(_) => ColumnType::Float,
            Value::Bool(_) => ColumnType::Bool,
            Value::String(_) => ColumnType::String,
        }
    }

    pub fn try_int(&self) -> Result<i32, ValueTypeError> {
        match self {
            Value::Int(v) => Ok(*v),
            _ => Err(self.type_mismatch("Int")),
        }
    }

    pub fn try_float(&self) -> Result<f32, ValueTypeError> {
        match self {
            Value::Float(v) => Ok(*v),
            _ => Err(self.type_mismatch("Float")),
        }
    }

    pub fn try_bool(&self) -> Result<bool, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_str(&self) -> Result<&str, ValueTypeError> {
        match self {
            Value::String(v) => Ok(v.as_str()),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
            Value::String(_) => "String",
        }
    }
}
