//! Persisted instance files.
//!
//! An instance is a JSON document shaped like the generated serde types:
//! `{ "rows": [ { "<column>": <value>, ... }, ... ] }`, so downstream code
//! can deserialize it with the generated structs. Loading here is
//! schema-directed instead: each column is read by name and coerced to its
//! declared type, with absent or mismatched fields degrading to the column
//! default, the same tolerance cell tokens get.

use std::{fs, io, path::Path};

use csv2so_core::{ColumnType, Record, Schema, Table, Value, default_value};
use serde_json::{Map, Value as Json, json};

use crate::error::EngineError;

/// Load a table from an instance file, directed by `schema`.
pub fn load_table(path: &Path, schema: &Schema) -> Result<Table, EngineError> {
    let bytes = fs::read(path)?;
    let doc: Json = serde_json::from_slice(&bytes).map_err(|source| EngineError::AssetParse {
        path: path.display().to_string(),
        source,
    })?;

    let rows = doc
        .get("rows")
        .and_then(Json::as_array)
        .ok_or_else(|| EngineError::AssetInvalid {
            path: path.display().to_string(),
            detail: "missing `rows` array".to_string(),
        })?;

    let mut table = Table::default();
    for row in rows {
        let mut record = Record::defaults(schema);
        if let Some(fields) = row.as_object() {
            for (index, column) in schema.iter().enumerate() {
                if let Some(field) = fields.get(&column.name) {
                    record.set(index, json_to_value(column.ty, field));
                }
            }
        }
        table.push(record);
    }
    Ok(table)
}

/// Persist a table as one instance file, pretty-printed with a trailing
/// newline. Rewrites the whole file.
pub fn save_table(path: &Path, schema: &Schema, table: &Table) -> Result<(), EngineError> {
    let mut rows = Vec::with_capacity(table.len());
    for record in table.iter() {
        let mut fields = Map::new();
        for (index, column) in schema.iter().enumerate() {
            let value = match record.value(index) {
                Some(value) => value_to_json(value),
                None => value_to_json(&default_value(column.ty)),
            };
            fields.insert(column.name.clone(), value);
        }
        rows.push(Json::Object(fields));
    }

    let text = serde_json::to_string_pretty(&json!({ "rows": rows })).map_err(io::Error::from)?;
    fs::write(path, format!("{text}\n"))?;
    Ok(())
}

fn json_to_value(ty: ColumnType, field: &Json) -> Value {
    match ty {
        ColumnType::Int => Value::Int(field.as_i64().map(|v| v as i32).unwrap_or(0)),
        ColumnType::Float => Value::Float(field.as_f64().map(|v| v as f32).unwrap_or(0.0)),
        ColumnType::Bool => Value::Bool(field.as_bool().unwrap_or(false)),
        ColumnType::String => Value::string(field.as_str().unwrap_or_default()),
    }
}

fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Int(v) => json!(v),
        Value::Float(v) => json!(v),
        Value::Bool(v) => json!(v),
        Value::String(v) => json!(v),
    }
}
