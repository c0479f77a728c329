//! Profile record - one resume variant

use serde::{Deserialize, Serialize};

/// A named group of skills, embedded inline in a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category label (e.g. "Languages")
    pub category: String,

    /// Skills in display order
    pub items: Vec<String>,
}

/// One resume variant: a title and summary of its own, inline skill
/// categories, and ordered lists of record IDs into the shared data pool.
///
/// The order of each ID list is the order the resolved records appear in
/// the rendered document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Headline title for this variant (e.g. "Data Scientist")
    pub title: String,

    /// Summary paragraph under the header
    pub summary: String,

    /// Skill categories, inline data rather than references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillCategory>>,

    /// Experience IDs, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experiences: Vec<String>,

    /// Project IDs, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,

    /// Education IDs, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<String>,

    /// Certification IDs, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,

    /// Research paper IDs, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub research_papers: Vec<String>,

    /// Club and association IDs, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clubs_and_associations: Vec<String>,

    /// Hobby IDs, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hobbies: Vec<String>,
}

impl Profile {
    /// Total number of record references across all seven ID lists.
    pub fn reference_count(&self) -> usize {
        self.experiences.len()
            + self.projects.len()
            + self.education.len()
            + self.certifications.len()
            + self.research_papers.len()
            + self.clubs_and_associations.len()
            + self.hobbies.len()
    }
}
