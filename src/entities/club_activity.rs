//! Club and association record

use serde::{Deserialize, Serialize};
use url::Url;

/// A role in a club, association, or community.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubActivity {
    /// Club or association name
    pub name: String,

    /// Role held
    pub role: String,

    /// Date range, free-form
    pub date: String,

    /// What the role involved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Club website URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_activity_roundtrip() {
        let yaml = "name: Rust Meetup\nrole: Organizer\ndate: 2023 - present\n";
        let club: ClubActivity = serde_yml::from_str(yaml).unwrap();
        let again: ClubActivity =
            serde_yml::from_str(&serde_yml::to_string(&club).unwrap()).unwrap();
        assert_eq!(again.role, "Organizer");
        assert!(again.description.is_none());
    }
}
