use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use csv2so::{ImportRequest, SyncEngine};

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the CSV sheet
    input: PathBuf,

    /// Directory holding the registry manifest and instance files
    #[arg(short, long, default_value = "generated")]
    out_dir: PathBuf,
}

impl ImportArgs {
    pub fn run(self) -> Result<()> {
        let engine = SyncEngine::new();
        let outcome = engine.import(&ImportRequest {
            csv_path: self.input,
            out_dir: self.out_dir,
        })?;

        println!(
            "imported {} rows into {} at {}",
            outcome.rows,
            outcome.type_name,
            outcome.asset_path.display()
        );
        Ok(())
    }
}
