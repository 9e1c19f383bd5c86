//! Name-keyed registry of generated container types.
//!
//! Import and export never scan for types; they look the container type up
//! by its exact name in the registry persisted next to the generated files.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use csv2so_core::Schema;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// File name the registry manifest is stored under, inside the output
/// directory.
pub const MANIFEST_FILE: &str = "csv2so-manifest.json";

/// Everything the engine records about one generated container type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub type_name: String,
    pub base_name: String,
    pub schema: Schema,
    pub source_file: String,
    pub asset_file: String,
}

/// Generated types known to one output directory, keyed by exact container
/// type name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
}

#[derive(Serialize, Deserialize)]
struct Manifest {
    types: Vec<TypeDescriptor>,
}

impl TypeRegistry {
    pub fn manifest_path(out_dir: &Path) -> PathBuf {
        out_dir.join(MANIFEST_FILE)
    }

    /// Load the registry for an output directory. A missing manifest is an
    /// empty registry; a present but unparseable one is an error.
    pub fn load(out_dir: &Path) -> Result<Self, EngineError> {
        let path = Self::manifest_path(out_dir);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        let manifest: Manifest =
            serde_json::from_slice(&bytes).map_err(|source| EngineError::ManifestInvalid {
                path: path.display().to_string(),
                source,
            })?;

        let types = manifest
            .types
            .into_iter()
            .map(|descriptor| (descriptor.type_name.clone(), descriptor))
            .collect();
        Ok(Self { types })
    }

    /// Rewrite the whole manifest, name-sorted so reruns produce identical
    /// bytes.
    pub fn save(&self, out_dir: &Path) -> Result<(), EngineError> {
        let mut types: Vec<TypeDescriptor> = self.types.values().cloned().collect();
        types.sort_by(|a, b| a.type_name.cmp(&b.type_name));

        let text =
            serde_json::to_string_pretty(&Manifest { types }).map_err(io::Error::from)?;
        fs::write(Self::manifest_path(out_dir), format!("{text}\n"))?;
        Ok(())
    }

    /// Register or replace a type under its name.
    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.type_name.clone(), descriptor);
    }

    /// Exact-name lookup.
    pub fn lookup(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }
}
