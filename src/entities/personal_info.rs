//! Personal information record

use serde::{Deserialize, Serialize};
use url::Url;

/// Contact details rendered into the resume header.
///
/// Every field except `name` is optional; URL-typed fields must parse as
/// absolute URLs or the record is rejected at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Full name
    pub name: String,

    /// Phone number, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// LinkedIn profile URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<Url>,

    /// GitHub profile URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<Url>,

    /// Personal blog URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<Url>,

    /// Portfolio / projects page URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_page: Option<Url>,

    /// PyPI author page URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pypi: Option<Url>,

    /// passport.dev profile URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_dev: Option<Url>,

    /// City / country line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_personal_info() {
        let info: PersonalInfo = serde_yml::from_str("name: Jane Doe").unwrap();
        assert_eq!(info.name, "Jane Doe");
        assert!(info.email.is_none());
        assert!(info.github.is_none());
    }

    #[test]
    fn test_url_fields_roundtrip() {
        let yaml = "name: Jane Doe\ngithub: https://github.com/jane\n";
        let info: PersonalInfo = serde_yml::from_str(yaml).unwrap();
        let again: PersonalInfo =
            serde_yml::from_str(&serde_yml::to_string(&info).unwrap()).unwrap();
        assert_eq!(again.name, "Jane Doe");
        assert_eq!(again.github.unwrap().as_str(), "https://github.com/jane");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let yaml = "name: Jane Doe\nlinkedin: not a url\n";
        assert!(serde_yml::from_str::<PersonalInfo>(yaml).is_err());
    }

    #[test]
    fn test_missing_name_rejected() {
        assert!(serde_yml::from_str::<PersonalInfo>("email: jane@example.com").is_err());
    }
}
