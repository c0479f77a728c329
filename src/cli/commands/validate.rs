//! `vitae validate` command - check every data file and profile
//!
//! Loads everything the generate pipeline would load and resolves every
//! profile against the pool, so broken references surface before anyone
//! needs a rendered document.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::Reporter;
use crate::core::{build_resume_context, load_personal_info, load_shared_data};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Data directory to validate
    #[arg(long, short = 'd', env = "VITAE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Continue validation after a failing profile
    #[arg(long)]
    pub keep_going: bool,
}

pub fn run(args: ValidateArgs, reporter: &Reporter) -> Result<()> {
    reporter.step(&format!("Validating {}", args.data_dir.display()));

    let personal_info = load_personal_info(&args.data_dir)?;
    println!(
        "{} personal_info.yml ({})",
        style("✓").green(),
        personal_info.name
    );

    let shared = load_shared_data(&args.data_dir)?;
    println!(
        "{} {} record(s), {} profile(s)",
        style("✓").green(),
        shared.record_count(),
        shared.profiles.len()
    );
    reporter.detail(&format!("experiences: {}", shared.experiences.len()));
    reporter.detail(&format!("projects: {}", shared.projects.len()));
    reporter.detail(&format!("education: {}", shared.education.len()));
    reporter.detail(&format!("certifications: {}", shared.certifications.len()));
    reporter.detail(&format!("research_papers: {}", shared.research_papers.len()));
    reporter.detail(&format!(
        "clubs_and_associations: {}",
        shared.clubs_and_associations.len()
    ));
    reporter.detail(&format!("hobbies: {}", shared.hobbies.len()));

    let mut failed = 0usize;
    for name in shared.profiles.keys() {
        match build_resume_context(&personal_info, name, &shared) {
            Ok(context) => println!(
                "{} profile {} ({} record(s))",
                style("✓").green(),
                name,
                context.sections.record_count()
            ),
            Err(err) if args.keep_going => {
                println!("{} profile {}: {}", style("✗").red(), name, err);
                failed += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if failed > 0 {
        return Err(miette::miette!("{failed} profile(s) failed validation"));
    }

    reporter.success(&format!("{} profile(s) valid", shared.profiles.len()));
    Ok(())
}
