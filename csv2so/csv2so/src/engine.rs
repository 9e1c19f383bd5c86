//! The sync engine driving generate, import, and export.

use std::{fs, path::Path};

use csv2so_codegen::{
    SourceSpec, asset_file_name, base_name, container_name, render_source, source_file_name,
};
use csv2so_core::{Schema, SchemaError, Table, parse_schema};
use encoding_rs::{Encoding, SHIFT_JIS};

use crate::{
    asset,
    csv::{self, HEADER_LINES},
    encoding::{read_text, write_with_bom},
    error::EngineError,
    registry::{TypeDescriptor, TypeRegistry},
    request::{
        ExportOutcome, ExportRequest, GenerateOutcome, GenerateRequest, ImportOutcome,
        ImportRequest,
    },
};

/// Runs the sheet operations against one output directory layout. The
/// engine is stateless across calls; the registry manifest is loaded fresh
/// per operation.
pub struct SyncEngine {
    source_encoding: &'static Encoding,
}

/// Builder for configuring [`SyncEngine`].
pub struct SyncEngineBuilder {
    source_encoding: &'static Encoding,
}

impl SyncEngine {
    /// Create a builder for [`SyncEngine`].
    pub fn builder() -> SyncEngineBuilder {
        SyncEngineBuilder {
            source_encoding: SHIFT_JIS,
        }
    }

    pub fn new() -> Self {
        Self {
            source_encoding: SHIFT_JIS,
        }
    }

    /// Parse the schema from a sheet file without generating anything.
    pub fn parse_schema_at(&self, path: &Path) -> Result<Schema, EngineError> {
        let text = self.read_sheet(path)?;
        parse_schema(&text).map_err(|source| EngineError::SchemaInvalid {
            path: path.display().to_string(),
            source,
        })
    }

    /// Generate the container source for a sheet and register the type.
    ///
    /// Writes `<out_dir>/<base>SO.rs` (UTF-8 with BOM) and rewrites the
    /// registry manifest. Nothing is written when the sheet, its schema, or
    /// an existing manifest is invalid. Rerunning with the same inputs
    /// rewrites identical bytes.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateOutcome, EngineError> {
        let schema = self.parse_schema_at(&request.csv_path)?;
        let base = Self::sheet_base_name(&request.csv_path)?;

        let mut spec = SourceSpec::new(base.clone());
        spec.namespace = request.namespace.clone().filter(|ns| !ns.is_empty());
        spec.implement_identifiable = request.implement_identifiable;
        let source = render_source(&schema, &spec)?;

        // Load before the first write so a corrupt manifest aborts the run
        // with the output directory untouched.
        let mut registry = TypeRegistry::load(&request.out_dir)?;

        fs::create_dir_all(&request.out_dir)?;
        let source_path = request.out_dir.join(source_file_name(&base));
        write_with_bom(&source_path, &source)?;

        let type_name = container_name(&base);
        let columns = schema.width();
        registry.insert(TypeDescriptor {
            type_name: type_name.clone(),
            base_name: base.clone(),
            schema,
            source_file: source_file_name(&base),
            asset_file: asset_file_name(&base),
        });
        registry.save(&request.out_dir)?;

        Ok(GenerateOutcome {
            type_name,
            source_path,
            columns,
        })
    }

    /// Replace the persisted instance of a sheet's container type with the
    /// sheet's data rows.
    ///
    /// The registered schema is authoritative for conversion; the sheet's
    /// three front-matter lines are skipped without re-validation, which
    /// keeps exported sheets importable. The replacement table is built
    /// fully in memory and persisted in one write, so a failed run leaves
    /// the previous instance untouched.
    pub fn import(&self, request: &ImportRequest) -> Result<ImportOutcome, EngineError> {
        let text = self.read_sheet(&request.csv_path)?;
        let base = Self::sheet_base_name(&request.csv_path)?;
        let type_name = container_name(&base);

        let registry = TypeRegistry::load(&request.out_dir)?;
        let descriptor =
            registry
                .lookup(&type_name)
                .ok_or_else(|| EngineError::TypeNotFound {
                    type_name: type_name.clone(),
                })?;

        let header_lines = text.lines().take(HEADER_LINES).count();
        if header_lines < HEADER_LINES {
            return Err(EngineError::SchemaInvalid {
                path: request.csv_path.display().to_string(),
                source: SchemaError::TooFewLines {
                    found: header_lines,
                },
            });
        }

        let schema = &descriptor.schema;
        let bindings = schema.bindings();
        let mut table = Table::default();
        for line in text.lines().skip(HEADER_LINES) {
            if csv::is_skippable(line) {
                continue;
            }
            table.push(csv::record_from_line(line, schema, &bindings));
        }

        let asset_path = request.out_dir.join(&descriptor.asset_file);
        asset::save_table(&asset_path, schema, &table)?;

        Ok(ImportOutcome {
            type_name,
            asset_path,
            rows: table.len(),
        })
    }

    /// Write the persisted instance of a registered type back out as sheet
    /// text at the requested destination, plain UTF-8.
    pub fn export(&self, request: &ExportRequest) -> Result<ExportOutcome, EngineError> {
        let registry = TypeRegistry::load(&request.out_dir)?;
        let descriptor =
            registry
                .lookup(&request.type_name)
                .ok_or_else(|| EngineError::TypeNotFound {
                    type_name: request.type_name.clone(),
                })?;

        let asset_path = request.out_dir.join(&descriptor.asset_file);
        if !asset_path.is_file() {
            return Err(EngineError::AssetNotFound {
                type_name: request.type_name.clone(),
                path: asset_path.display().to_string(),
            });
        }

        let table = asset::load_table(&asset_path, &descriptor.schema)?;
        let text = csv::render_csv(&descriptor.schema, &table)?;
        fs::write(&request.dest_path, &text)?;

        Ok(ExportOutcome {
            type_name: request.type_name.clone(),
            dest_path: request.dest_path.clone(),
            rows: table.len(),
        })
    }

    fn read_sheet(&self, path: &Path) -> Result<String, EngineError> {
        if !path.is_file() {
            return Err(EngineError::CsvNotFound {
                path: path.display().to_string(),
            });
        }
        Ok(read_text(path, self.source_encoding)?)
    }

    fn sheet_base_name(path: &Path) -> Result<String, EngineError> {
        base_name(path).ok_or_else(|| EngineError::InvalidCsvPath {
            path: path.display().to_string(),
        })
    }
}

impl Default for SyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncEngineBuilder {
    /// Encoding hand-authored sheets are decoded with (default: Shift_JIS).
    /// Files carrying a BOM override it.
    pub fn with_source_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.source_encoding = encoding;
        self
    }

    /// Build the engine.
    pub fn build(self) -> SyncEngine {
        SyncEngine {
            source_encoding: self.source_encoding,
        }
    }
}
