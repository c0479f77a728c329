//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    completions::CompletionsArgs, generate::GenerateArgs, init::InitArgs, profiles::ProfilesArgs,
    validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "vitae")]
#[command(author, version, about = "Generate tailored resumes from plain-text YAML data")]
#[command(long_about = "Generate resume variants from a shared pool of YAML records. \
A profile selects and orders records for one variant; a Tera template turns the \
resolved selection into LaTeX or any other text format.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one resume variant to a file
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Check every data file and resolve every profile
    Validate(ValidateArgs),

    /// List the profiles defined in a data directory
    Profiles(ProfilesArgs),

    /// Scaffold a starter data directory
    Init(InitArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
