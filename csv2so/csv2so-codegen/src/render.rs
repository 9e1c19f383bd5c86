use std::fmt::{Error, Result, Write as _};

use csv2so_core::{ColumnType, Schema};

use crate::{
    naming::{container_name, record_name},
    sanitize::{field_ident, sanitize_comment},
};

/// First line of every generated file.
pub const GENERATED_HEADER: &str =
    "// @generated by csv2so. Manual edits will be overwritten.";

/// What to generate for one sheet, beyond the schema itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    /// Base name all type and file names derive from.
    pub base_name: String,
    /// Module the generated items are wrapped in, if any.
    pub namespace: Option<String>,
    /// Implement `Identifiable` on the container when the schema has an
    /// `int` column named `id`.
    pub implement_identifiable: bool,
}

impl SourceSpec {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            namespace: None,
            implement_identifiable: false,
        }
    }
}

/// Render the full generated source for one sheet: a row struct with one
/// typed `pub` field per column, a container struct holding `Vec` of rows,
/// and optionally an `Identifiable` impl. Deterministic for a given schema
/// and spec.
pub fn render_source(schema: &Schema, spec: &SourceSpec) -> std::result::Result<String, Error> {
    let mut out = String::new();

    writeln!(out, "{GENERATED_HEADER}")?;
    writeln!(out)?;

    match spec.namespace.as_deref() {
        Some(namespace) => {
            writeln!(out, "pub mod {namespace} {{")?;
            render_items(schema, spec, 4, &mut out)?;
            writeln!(out, "}}")?;
        }
        None => render_items(schema, spec, 0, &mut out)?,
    }

    Ok(out)
}

fn render_items(schema: &Schema, spec: &SourceSpec, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let row = record_name(&spec.base_name);
    let container = container_name(&spec.base_name);

    writeln!(out, "{pad}use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;

    // Row struct. Names come verbatim from the sheet, so lint the way the
    // sheet spells them.
    writeln!(out, "{pad}#[allow(non_camel_case_types, non_snake_case)]")?;
    writeln!(
        out,
        "{pad}#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]"
    )?;
    writeln!(out, "{pad}pub struct {row} {{")?;
    for column in schema.iter() {
        if !column.comment.is_empty() {
            writeln!(out, "{pad}    #[doc = \" {}\"]", sanitize_comment(&column.comment))?;
        }
        let ident = field_ident(&column.name);
        if ident.trim_start_matches("r#") != column.name {
            writeln!(out, "{pad}    #[serde(rename = \"{}\")]", column.name)?;
        }
        writeln!(out, "{pad}    pub {ident}: {},", rust_type(column.ty))?;
    }
    writeln!(out, "{pad}}}")?;
    writeln!(out)?;

    writeln!(out, "{pad}#[allow(non_camel_case_types)]")?;
    writeln!(
        out,
        "{pad}#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]"
    )?;
    writeln!(out, "{pad}pub struct {container} {{")?;
    writeln!(out, "{pad}    pub rows: Vec<{row}>,")?;
    writeln!(out, "{pad}}}")?;

    if spec.implement_identifiable && schema.id_column().is_some() {
        writeln!(out)?;
        writeln!(out, "{pad}impl ::csv2so_core::Identifiable for {container} {{")?;
        writeln!(out, "{pad}    fn representative_id(&self) -> i32 {{")?;
        writeln!(out, "{pad}        self.rows")?;
        writeln!(out, "{pad}            .first()")?;
        writeln!(out, "{pad}            .map(|row| row.id)")?;
        writeln!(out, "{pad}            .unwrap_or(::csv2so_core::NO_ID)")?;
        writeln!(out, "{pad}    }}")?;
        writeln!(out, "{pad}}}")?;
    }

    Ok(())
}

fn rust_type(ty: ColumnType) -> &'static str {
    match ty {
        ColumnType::Int => "i32",
        ColumnType::Float => "f32",
        ColumnType::Bool => "bool",
        ColumnType::String => "String",
    }
}
