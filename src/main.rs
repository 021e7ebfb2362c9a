use clap::Parser;
use miette::Result;
use spritemap::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => spritemap::cli::convert::run(args)?,
        Commands::Check(args) => spritemap::cli::check::run(args)?,
        Commands::Completions(args) => spritemap::cli::completions::run(args)?,
    }

    Ok(())
}
