mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    export::ExportArgs, generate::GenerateArgs, import::ImportArgs, schema::SchemaArgs,
};

#[derive(Parser)]
#[command(
    name = "sosync",
    about = "Generate container types from CSV sheets and sync their instance data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a container type from a sheet's header lines
    Generate(GenerateArgs),
    /// Replace a container's instance data with a sheet's data rows
    Import(ImportArgs),
    /// Write a container's instance data back out as a sheet
    Export(ExportArgs),
    /// Print the schema declared by a sheet
    Schema(SchemaArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::Import(args) => args.run(),
        Commands::Export(args) => args.run(),
        Commands::Schema(args) => args.run(),
    }
}
