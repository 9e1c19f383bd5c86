//! Rust source generation for sheet-backed data containers.
//!
//! Given a parsed [`Schema`](csv2so_core::Schema), this crate renders the
//! source of a plain-data row struct plus its container struct, and the
//! file names those artifacts live under. Rendering is pure text; writing
//! files and tracking generated types is the engine's concern.

mod naming;
mod render;
mod sanitize;

pub use naming::{
    CONTAINER_SUFFIX, asset_file_name, base_name, container_name, record_name,
    source_file_name,
};
pub use render::{GENERATED_HEADER, SourceSpec, render_source};
pub use sanitize::{field_ident, sanitize_comment};
