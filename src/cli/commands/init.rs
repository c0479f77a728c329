//! `vitae init` command - scaffold a starter data directory

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::Reporter;
use crate::render::generator;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to scaffold (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite starter files that already exist
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, reporter: &Reporter) -> Result<()> {
    if !args.path.exists() {
        fs::create_dir_all(&args.path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(args.path.display()).cyan()
        );
    }

    let mut written = 0usize;
    for (name, contents) in generator::starter_files() {
        let target = args.path.join(&name);
        if target.exists() && !args.force {
            reporter.warn(&format!(
                "{name} already exists, skipping (use --force to overwrite)"
            ));
            continue;
        }
        fs::write(&target, contents).into_diagnostic()?;
        println!("  {} {}", style("+").green(), style(&name).dim());
        written += 1;
    }

    if written > 0 {
        println!();
        println!(
            "{} Initialized data directory at {}",
            style("✓").green(),
            style(args.path.display()).cyan()
        );
        println!();
        println!("Next steps:");
        println!(
            "  {} Put your own records in the starter files",
            style("$EDITOR personal_info.yml").yellow()
        );
        println!(
            "  {} List the starter profile",
            style("vitae profiles -d .").yellow()
        );
        println!(
            "  {} Render it",
            style("vitae generate -d . -p DEFAULT -o resume.tex").yellow()
        );
    }

    Ok(())
}
