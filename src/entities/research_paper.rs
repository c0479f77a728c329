//! Research paper record

use serde::{Deserialize, Serialize};
use url::Url;

/// Publication status - a closed enumeration; any other string is rejected
/// at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperStatus {
    Published,
    #[serde(rename = "In Preparation")]
    InPreparation,
    Submitted,
    Preprint,
}

impl std::fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaperStatus::Published => write!(f, "Published"),
            PaperStatus::InPreparation => write!(f, "In Preparation"),
            PaperStatus::Submitted => write!(f, "Submitted"),
            PaperStatus::Preprint => write!(f, "Preprint"),
        }
    }
}

/// A research paper or publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchPaper {
    /// Paper title
    pub title: String,

    /// Author list, formatted as it should appear
    pub authors: String,

    /// Publication status
    pub status: PaperStatus,

    /// DOI or preprint URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Url>,
}
