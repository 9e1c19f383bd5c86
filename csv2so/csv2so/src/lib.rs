//! CSV-driven code generation and data sync for sheet-backed containers.
//!
//! A sheet's first three lines declare a schema (per-column comments, field
//! names, type tokens). [`SyncEngine::generate`] renders a typed row struct
//! and container struct from that schema and registers the type in a
//! manifest next to the generated source. [`SyncEngine::import`] replaces
//! the type's persisted JSON instance with the sheet's data rows;
//! [`SyncEngine::export`] writes the instance back out as sheet text.
//!
//! ```no_run
//! use csv2so::{GenerateRequest, SyncEngine};
//!
//! let engine = SyncEngine::new();
//! let outcome = engine.generate(&GenerateRequest {
//!     csv_path: "sheets/Character.csv".into(),
//!     out_dir: "generated".into(),
//!     namespace: None,
//!     implement_identifiable: true,
//! })?;
//! println!("generated {}", outcome.type_name);
//! # Ok::<(), csv2so::EngineError>(())
//! ```

mod asset;
mod csv;
mod encoding;
mod engine;
mod error;
mod registry;
mod request;

pub use csv::EXPORT_COMMENT;
pub use csv2so_codegen as codegen;
pub use csv2so_core as core;
pub use encoding::UTF8_BOM;
pub use engine::{SyncEngine, SyncEngineBuilder};
pub use error::EngineError;
pub use registry::{MANIFEST_FILE, TypeDescriptor, TypeRegistry};
pub use request::{
    ExportOutcome, ExportRequest, GenerateOutcome, GenerateRequest, ImportOutcome, ImportRequest,
};
