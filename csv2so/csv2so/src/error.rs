//! Error types for the sync engine.

use csv2so_core::SchemaError;

/// Errors produced by [`SyncEngine`](crate::SyncEngine) operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// I/O error while reading or writing a sheet, instance, or manifest.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The sheet path does not exist.
    #[error("CSV file not found: {path}")]
    CsvNotFound { path: String },

    /// The sheet path has no file stem to derive type names from.
    #[error("cannot derive a type name from CSV path: {path}")]
    InvalidCsvPath { path: String },

    /// The sheet's first three lines do not form a schema.
    #[error("invalid schema in {path}: {source}")]
    SchemaInvalid {
        path: String,
        #[source]
        source: SchemaError,
    },

    /// The requested container type is not in the registry.
    #[error("type '{type_name}' is not registered; run generate first")]
    TypeNotFound { type_name: String },

    /// The type is registered but no instance has been imported yet.
    #[error("no instance found for type '{type_name}' at {path}")]
    AssetNotFound { type_name: String, path: String },

    /// A registry manifest exists but cannot be parsed.
    #[error("invalid registry manifest {path}: {source}")]
    ManifestInvalid {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A persisted instance exists but is not valid JSON.
    #[error("invalid instance data {path}: {source}")]
    AssetParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A persisted instance parsed as JSON but has the wrong shape.
    #[error("invalid instance data {path}: {detail}")]
    AssetInvalid { path: String, detail: String },

    /// Generated source or exported text failed to render.
    #[error(transparent)]
    Render(#[from] std::fmt::Error),
}
