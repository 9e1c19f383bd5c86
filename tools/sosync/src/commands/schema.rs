use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use csv2so::{core::format_schema, SyncEngine};

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the CSV sheet
    input: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let engine = SyncEngine::new();
        let schema = engine.parse_schema_at(&self.input)?;
        let text = format_schema(&schema)?;

        match self.output {
            Some(path) => fs::write(path, &text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
