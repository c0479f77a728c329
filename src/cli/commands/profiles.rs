//! `vitae profiles` command - list resume variants in a data directory

use miette::Result;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::Reporter;
use crate::core::load_shared_data;

#[derive(clap::Args, Debug)]
pub struct ProfilesArgs {
    /// Data directory to read profiles from
    #[arg(long, short = 'd', env = "VITAE_DATA_DIR")]
    pub data_dir: PathBuf,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "TITLE")]
    title: String,

    #[tabled(rename = "REFS")]
    references: usize,

    #[tabled(rename = "SKILL GROUPS")]
    skill_groups: usize,
}

pub fn run(args: ProfilesArgs, reporter: &Reporter) -> Result<()> {
    let shared = load_shared_data(&args.data_dir)?;

    if shared.profiles.is_empty() {
        reporter.warn("no profiles defined; add one to profiles.yml");
        return Ok(());
    }

    let rows: Vec<ProfileRow> = shared
        .profiles
        .iter()
        .map(|(name, profile)| ProfileRow {
            name: name.clone(),
            title: profile.title.clone(),
            references: profile.reference_count(),
            skill_groups: profile.skills.as_ref().map_or(0, Vec::len),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::blank());
    println!("{table}");

    Ok(())
}
