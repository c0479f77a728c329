//! Work experience record

use serde::{Deserialize, Serialize};
use url::Url;

/// One position at one company.
///
/// `location` defaults to an empty string rather than being absent, so
/// templates can interpolate it unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    /// Position title
    pub title: String,

    /// Company or organization name
    pub company: String,

    /// Date range, free-form (e.g. "2021 - 2023")
    pub date: String,

    /// Work location
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    /// Achievement bullet points, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullet_points: Vec<String>,

    /// Company or project URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_roundtrip() {
        let exp = Experience {
            title: "Engineer".to_string(),
            company: "TechCo".to_string(),
            date: "2020 - 2022".to_string(),
            location: "Remote".to_string(),
            bullet_points: vec!["Shipped the thing".to_string()],
            link: None,
        };

        let yaml = serde_yml::to_string(&exp).unwrap();
        let parsed: Experience = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(parsed.title, exp.title);
        assert_eq!(parsed.company, exp.company);
        assert_eq!(parsed.bullet_points, exp.bullet_points);
    }

    #[test]
    fn test_location_defaults_to_empty_string() {
        let yaml = "title: Engineer\ncompany: TechCo\ndate: '2020'\n";
        let exp: Experience = serde_yml::from_str(yaml).unwrap();
        assert_eq!(exp.location, "");
        assert!(exp.bullet_points.is_empty());
    }
}
