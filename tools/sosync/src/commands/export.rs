use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use csv2so::{ExportRequest, SyncEngine};

#[derive(Args)]
pub struct ExportArgs {
    /// Registered container type name (e.g. CharacterSO)
    type_name: String,

    /// Destination CSV path
    dest: PathBuf,

    /// Directory holding the registry manifest and instance files
    #[arg(short, long, default_value = "generated")]
    out_dir: PathBuf,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let engine = SyncEngine::new();
        let outcome = engine.export(&ExportRequest {
            type_name: self.type_name,
            dest_path: self.dest,
            out_dir: self.out_dir,
        })?;

        println!(
            "exported {} rows of {} to {}",
            outcome.rows,
            outcome.type_name,
            outcome.dest_path.display()
        );
        Ok(())
    }
}
