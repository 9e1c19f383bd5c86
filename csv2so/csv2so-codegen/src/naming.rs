//! Names derived from a sheet's file name.
//!
//! Every generated artifact hangs off one base name: the CSV file stem with
//! spaces turned into underscores. `Character.csv` yields the `CharacterRow`
//! record, the `CharacterSO` container, and the `CharacterSO.rs` /
//! `CharacterSO.json` files.

use std::path::Path;

/// Suffix appended to the base name to form the container type name.
pub const CONTAINER_SUFFIX: &str = "SO";

/// Base name for all artifacts generated from this sheet path: the file
/// stem with spaces replaced by underscores. `None` when the path has no
/// usable stem.
pub fn base_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.replace(' ', "_"))
}

/// Container type name: `<base>SO`.
pub fn container_name(base: &str) -> String {
    format!("{base}{CONTAINER_SUFFIX}")
}

/// Row type name: `<base>Row`.
pub fn record_name(base: &str) -> String {
    format!("{base}Row")
}

/// File name the generated source is written under.
pub fn source_file_name(base: &str) -> String {
    format!("{base}{CONTAINER_SUFFIX}.rs")
}

/// File name the persisted instance is written under.
pub fn asset_file_name(base: &str) -> String {
    format!("{base}{CONTAINER_SUFFIX}.json")
}
