pub mod check;
pub mod completions;
pub mod convert;

use clap::{Parser, Subcommand};

/// spritemap - conf to Lua animation table converter
#[derive(Parser, Debug)]
#[command(name = "spritemap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert conf files into animations.lua tables
    Convert(convert::ConvertArgs),

    /// Report what conversion would drop, without writing
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
