use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use csv2so::{GenerateRequest, SyncEngine};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the CSV sheet
    input: PathBuf,

    /// Directory generated files and the registry manifest live in
    #[arg(short, long, default_value = "generated")]
    out_dir: PathBuf,

    /// Wrap the generated items in this module
    #[arg(short, long)]
    namespace: Option<String>,

    /// Implement Identifiable (requires an int column named `id`)
    #[arg(long)]
    identifiable: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let engine = SyncEngine::new();
        let outcome = engine.generate(&GenerateRequest {
            csv_path: self.input,
            out_dir: self.out_dir,
            namespace: self.namespace,
            implement_identifiable: self.identifiable,
        })?;

        println!(
            "generated {} ({} columns) at {}",
            outcome.type_name,
            outcome.columns,
            outcome.source_path.display()
        );
        Ok(())
    }
}
