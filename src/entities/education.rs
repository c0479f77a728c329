//! Education record

use serde::{Deserialize, Serialize};

/// One degree at one institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// Institution name
    pub institution: String,

    /// Institution location
    pub location: String,

    /// Degree earned
    pub degree: String,

    /// Honors, thesis topic, or other notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_roundtrip() {
        let yaml = "institution: MIT\nlocation: Cambridge, MA\ndegree: BSc Computer Science\n";
        let edu: Education = serde_yml::from_str(yaml).unwrap();
        let again: Education = serde_yml::from_str(&serde_yml::to_string(&edu).unwrap()).unwrap();
        assert_eq!(again.institution, "MIT");
        assert!(again.notes.is_none());
    }
}
