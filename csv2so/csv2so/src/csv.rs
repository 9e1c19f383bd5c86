//! Sheet text handling: data-line conversion and export rendering.

use std::fmt::{Error, Write as _};

use csv2so_core::{FieldBinding, Record, Schema, Table};

/// Comment line written at the top of every exported sheet.
pub const EXPORT_COMMENT: &str = "# exported by csv2so";

/// Front-matter lines before data rows: comments, names, types.
pub const HEADER_LINES: usize = 3;

/// Whether a line past the front matter carries no data: blank (all
/// whitespace) or first non-space character `#`.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Convert one data line into a record: start from column defaults, then
/// set each field whose position has a token. Tokens past the schema width
/// are ignored; missing trailing tokens leave defaults in place.
pub fn record_from_line(line: &str, schema: &Schema, bindings: &[FieldBinding]) -> Record {
    let mut record = Record::defaults(schema);
    for (index, token) in line.split(',').enumerate() {
        if index >= bindings.len() {
            break;
        }
        record.set(index, bindings[index].parse_token(token));
    }
    record
}

/// Render a table as sheet text: the fixed comment line, the name line, the
/// type line, then one line per record. Cells are written bare, with no
/// quoting or escaping; a string value containing a comma will not re-import
/// aligned.
pub fn render_csv(schema: &Schema, table: &Table) -> Result<String, Error> {
    let mut out = String::new();

    writeln!(out, "{EXPORT_COMMENT}")?;
    writeln!(out, "{}", schema.names().collect::<Vec<_>>().join(","))?;
    writeln!(out, "{}", schema.type_names().collect::<Vec<_>>().join(","))?;

    let bindings = schema.bindings();
    for record in table.iter() {
        let cells: Vec<String> = bindings
            .iter()
            .enumerate()
            .map(|(index, binding)| {
                record
                    .value(index)
                    .map(|value| binding.render(value))
                    .unwrap_or_default()
            })
            .collect();
        writeln!(out, "{}", cells.join(","))?;
    }

    Ok(out)
}
