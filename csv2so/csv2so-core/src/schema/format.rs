use std::fmt::{Error, Write as _};

use super::Schema;

/// Format a schema in a readable style, one column per line. Columns with an
/// empty comment render without the comment field.
pub fn format_schema(schema: &Schema) -> Result<String, Error> {
    let mut out = String::new();

    for column in schema.iter() {
        if column.comment.is_empty() {
            writeln!(out, "{}: {{ type: {} }}", column.name, column.ty)?;
        } else {
            writeln!(
                out,
                "{}: {{ type: {}, comment: {:?} }}",
                column.name, column.ty, column.comment
            )?;
        }
    }

    Ok(out)
}
