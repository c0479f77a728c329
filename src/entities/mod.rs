//! Record type definitions
//!
//! Every resume data point is one of the following record types:
//!
//! **Header:**
//! - [`PersonalInfo`] - Name and contact details for the resume header
//!
//! **Keyed records** (stored as ID → record mappings in the data pool):
//! - [`Experience`] - Work experience entries
//! - [`Project`] - Personal or professional projects
//! - [`Education`] - Degrees and institutions
//! - [`Certification`] - Certifications and awards
//! - [`ResearchPaper`] - Publications with a closed status enum
//! - [`ClubActivity`] - Club and association roles
//! - [`Hobby`] - Hobbies and interests
//!
//! **Selection:**
//! - [`Profile`] - One resume variant: title, summary, inline skills and
//!   ordered lists of record IDs
//! - [`SharedData`] - The full pool of keyed records and profiles

pub mod certification;
pub mod club_activity;
pub mod education;
pub mod experience;
pub mod hobby;
pub mod personal_info;
pub mod profile;
pub mod project;
pub mod research_paper;
pub mod shared;

pub use certification::Certification;
pub use club_activity::ClubActivity;
pub use education::Education;
pub use experience::Experience;
pub use hobby::Hobby;
pub use personal_info::PersonalInfo;
pub use profile::{Profile, SkillCategory};
pub use project::Project;
pub use research_paper::{PaperStatus, ResearchPaper};
pub use shared::SharedData;
