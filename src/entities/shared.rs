//! The shared data pool

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{
    Certification, ClubActivity, Education, Experience, Hobby, Profile, Project, ResearchPaper,
};

/// Every keyed record available across all profiles, loaded once per run
/// and read-only afterwards.
///
/// Pool insertion order carries no meaning; display order comes from the
/// ID lists on a [`Profile`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedData {
    pub experiences: BTreeMap<String, Experience>,
    pub projects: BTreeMap<String, Project>,
    pub education: BTreeMap<String, Education>,
    pub certifications: BTreeMap<String, Certification>,
    pub research_papers: BTreeMap<String, ResearchPaper>,
    pub clubs_and_associations: BTreeMap<String, ClubActivity>,
    pub hobbies: BTreeMap<String, Hobby>,
    pub profiles: BTreeMap<String, Profile>,
}

impl SharedData {
    /// Total number of keyed records across all pools, profiles excluded.
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
