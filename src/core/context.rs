//! Reference resolution into a template context
//!
//! A profile's ID lists are a single-hop join against the shared data
//! pools: records never reference other records, so resolution is a plain
//! mapping lookup per ID, preserving list order. The first ID that fails
//! to resolve aborts the whole build; no partial context ever escapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::{DataError, Error};
use crate::entities::{
    Certification, ClubActivity, Education, Experience, Hobby, PersonalInfo, Project,
    ResearchPaper, SharedData, SkillCategory,
};

/// Fully resolved resume sections: records, not IDs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSections {
    /// Inline skills; serialized as null when absent so templates can
    /// branch on it directly
    pub skills: Option<Vec<SkillCategory>>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub research_papers: Vec<ResearchPaper>,
    pub clubs_and_associations: Vec<ClubActivity>,
    pub hobbies: Vec<Hobby>,
}

impl ResumeSections {
    /// Total number of resolved records across all seven lists.
    pub fn record_count(&self) -> usize {
        self.experiences.len()
            + self.projects.len()
            + self.education.len()
            + self.certifications.len()
            + self.research_papers.len()
            + self.clubs_and_associations.len()
            + self.hobbies.len()
    }
}

/// The schema-correct payload handed to the renderer, and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub personal_info: PersonalInfo,
    pub title: String,
    pub summary: String,
    pub sections: ResumeSections,
}

/// Resolve one profile's ID lists against the shared data pool.
///
/// Fails with a [`DataError`] citing the profile name if the profile does
/// not exist, or the profile, section, and ID if a reference does not
/// resolve.
pub fn build_resume_context(
    personal_info: &PersonalInfo,
    profile_name: &str,
    shared: &SharedData,
) -> Result<TemplateContext, Error> {
    let profile = shared
        .profiles
        .get(profile_name)
        .ok_or_else(|| DataError::UnknownProfile {
            name: profile_name.to_string(),
        })?;

    let sections = ResumeSections {
        skills: profile.skills.clone(),
        experiences: resolve(
            profile_name,
            "experiences",
            &profile.experiences,
            &shared.experiences,
        )?,
        projects: resolve(profile_name, "projects", &profile.projects, &shared.projects)?,
        education: resolve(
            profile_name,
            "education",
            &profile.education,
            &shared.education,
        )?,
        certifications: resolve(
            profile_name,
            "certifications",
            &profile.certifications,
            &shared.certifications,
        )?,
        research_papers: resolve(
            profile_name,
            "research_papers",
            &profile.research_papers,
            &shared.research_papers,
        )?,
        clubs_and_associations: resolve(
            profile_name,
            "clubs_and_associations",
            &profile.clubs_and_associations,
            &shared.clubs_and_associations,
        )?,
        hobbies: resolve(profile_name, "hobbies", &profile.hobbies, &shared.hobbies)?,
    };

    Ok(TemplateContext {
        personal_info: personal_info.clone(),
        title: profile.title.clone(),
        summary: profile.summary.clone(),
        sections,
    })
}

/// Look up every ID in order; the first miss aborts the section.
fn resolve<T: Clone>(
    profile: &str,
    section: &'static str,
    ids: &[String],
    pool: &BTreeMap<String, T>,
) -> Result<Vec<T>, DataError> {
    ids.iter()
        .map(|id| {
            pool.get(id)
                .cloned()
                .ok_or_else(|| DataError::UnknownReference {
                    profile: profile.to_string(),
                    section,
                    id: id.clone(),
                })
        })
        .collect()
}
