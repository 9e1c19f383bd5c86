//! Schema representation parsed from a sheet's three header lines.

mod format;
mod parse;
mod types;

pub use format::format_schema;
pub use parse::parse_schema;
pub use types::{Column, ColumnType, Schema};
