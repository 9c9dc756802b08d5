use clap::Parser;
use miette::Result;
use pxgen::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => pxgen::cli::generate::run(args)?,
        Commands::Palette(args) => pxgen::cli::palette::run(args)?,
    }

    Ok(())
}
