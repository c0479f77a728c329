//! `vitae generate` command - render one resume variant
//!
//! The whole pipeline in strict sequence: load personal info, load the
//! shared data pool, resolve the requested profile into a context, render
//! the template, write the output file.

use miette::Result;
use std::path::PathBuf;

use crate::cli::Reporter;
use crate::core::{build_resume_context, load_personal_info, load_shared_data};
use crate::render::Generator;

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Data directory containing personal_info.yml and the shared data files
    #[arg(long, short = 'd', env = "VITAE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Profile to render (e.g. DATASCIENTIST)
    #[arg(long, short = 'p')]
    pub profile: String,

    /// Tera template file (default: the built-in LaTeX template)
    #[arg(long, short = 't')]
    pub template: Option<PathBuf>,

    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}

pub fn run(args: GenerateArgs, reporter: &Reporter) -> Result<()> {
    reporter.step(&format!(
        "Loading personal info from {}",
        args.data_dir.display()
    ));
    let personal_info = load_personal_info(&args.data_dir)?;

    reporter.step(&format!(
        "Loading shared data from {}",
        args.data_dir.display()
    ));
    let shared = load_shared_data(&args.data_dir)?;
    reporter.detail(&format!(
        "{} record(s) available across {} profile(s)",
        shared.record_count(),
        shared.profiles.len()
    ));

    reporter.step(&format!("Building context for profile '{}'", args.profile));
    let context = build_resume_context(&personal_info, &args.profile, &shared)?;
    reporter.detail(&format!(
        "{} record(s) selected by the profile",
        context.sections.record_count()
    ));

    let generator = match &args.template {
        Some(path) => {
            reporter.step(&format!("Rendering template {}", path.display()));
            Generator::from_file(path)?
        }
        None => {
            reporter.step("Rendering built-in template");
            Generator::builtin()?
        }
    };
    generator.render_to_file(&context, &args.output)?;

    reporter.success(&format!("Generated resume: {}", args.output.display()));
    Ok(())
}
