//! Project record

use serde::{Deserialize, Serialize};
use url::Url;

/// A personal or professional project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,

    /// Repository or demo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Url>,

    /// One-paragraph description
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_roundtrip() {
        let yaml = "name: vitae\nlink: https://github.com/vitae-cli/vitae\ndescription: Resume generator\n";
        let project: Project = serde_yml::from_str(yaml).unwrap();
        let again: Project = serde_yml::from_str(&serde_yml::to_string(&project).unwrap()).unwrap();
        assert_eq!(again.name, "vitae");
        assert_eq!(again.link.unwrap().as_str(), "https://github.com/vitae-cli/vitae");
    }

    #[test]
    fn test_description_required() {
        assert!(serde_yml::from_str::<Project>("name: vitae").is_err());
    }
}
