//! Host-independent core types for `csv2so`.
//!
//! This crate provides the three-header-line schema parser, the typed
//! [`Value`] representation for record fields, the total token-conversion
//! policy, and the [`Identifiable`] capability contract implemented by
//! generated containers.

mod binding;
mod convert;
mod error;
mod identifiable;
mod schema;
mod table;
mod value;

pub use binding::FieldBinding;
pub use convert::{
    default_value, field_text, parse_bool_or_default, parse_float_or_default,
    parse_int_or_default, parse_or_default,
};
pub use error::{SchemaError, UnknownTypeName, ValueTypeError};
pub use identifiable::{Identifiable, NO_ID};
pub use schema::{Column, ColumnType, Schema, format_schema, parse_schema};
pub use table::{Record, Table};
pub use value::Value;
