//! Parser for the three-line sheet header.
//!
//! Line 1 carries per-column comments (one optional leading `#` is dropped),
//! line 2 field names, line 3 type tokens. Each line splits on `,` with
//! surrounding whitespace trimmed per token; there is no quoting and no
//! escape syntax. Lines past the third are data rows and are not the
//! parser's concern.

use crate::error::SchemaError;

use super::{Column, ColumnType, Schema};

/// Parse a schema from full sheet text.
///
/// Fails when fewer than three lines exist, when the three header lines
/// disagree on column count, or when a type token is not one of the
/// supported primitives.
pub fn parse_schema(text: &str) -> Result<Schema, SchemaError> {
    let header: Vec<&str> = text.lines().take(3).collect();
    if header.len() < 3 {
        return Err(SchemaError::TooFewLines {
            found: header.len(),
        });
    }

    let comment_line = header[0].strip_prefix('#').unwrap_or(header[0]);
    let comments = split_header(comment_line);
    let names = split_header(header[1]);
    let types = split_header(header[2]);

    if comments.len() != names.len() || names.len() != types.len() {
        return Err(SchemaError::ColumnCountMismatch {
            comments: comments.len(),
            names: names.len(),
            types: types.len(),
        });
    }

    let mut columns = Vec::with_capacity(names.len());
    for ((comment, name), token) in comments.into_iter().zip(names).zip(types) {
        let ty = ColumnType::parse(token).ok_or_else(|| SchemaError::UnknownType {
            token: token.to_string(),
            column: name.to_string(),
        })?;
        columns.push(Column::new(comment, name, ty));
    }

    Ok(Schema::new(columns))
}

fn split_header(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}
