//! Per-operation request and outcome types.
//!
//! Each engine operation takes everything it needs in one request struct;
//! the engine itself carries no per-sheet state between calls.

use std::path::PathBuf;

/// Inputs for one generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Sheet whose header lines declare the schema.
    pub csv_path: PathBuf,
    /// Directory generated artifacts and the registry manifest live in.
    pub out_dir: PathBuf,
    /// Module to wrap the generated items in. `None` or an empty name
    /// leaves them at the top level.
    pub namespace: Option<String>,
    /// Ask for an `Identifiable` impl; only honored when the schema has an
    /// `int` column named `id`.
    pub implement_identifiable: bool,
}

/// What a generate run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub type_name: String,
    pub source_path: PathBuf,
    pub columns: usize,
}

/// Inputs for one import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// Sheet whose data rows replace the persisted instance.
    pub csv_path: PathBuf,
    /// Directory holding the registry manifest and instance files.
    pub out_dir: PathBuf,
}

/// What an import run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub type_name: String,
    pub asset_path: PathBuf,
    pub rows: usize,
}

/// Inputs for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Registered container type whose instance is exported.
    pub type_name: String,
    /// CSV file to write.
    pub dest_path: PathBuf,
    /// Directory holding the registry manifest and instance files.
    pub out_dir: PathBuf,
}

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub type_name: String,
    pub dest_path: PathBuf,
    pub rows: usize,
}
