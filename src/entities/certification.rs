//! Certification record

use serde::{Deserialize, Serialize};
use url::Url;

/// A certification or award with a verifiable credential link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    /// Certification name
    pub name: String,

    /// Issuing organization
    pub issuer: String,

    /// Credential verification URL (required)
    pub credential_link: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_roundtrip() {
        let yaml = "name: AWS SAA\nissuer: Amazon\ncredential_link: https://aws.example.com/cert/123\n";
        let cert: Certification = serde_yml::from_str(yaml).unwrap();
        let again: Certification =
            serde_yml::from_str(&serde_yml::to_string(&cert).unwrap()).unwrap();
        assert_eq!(again.issuer, "Amazon");
    }

    #[test]
    fn test_credential_link_required() {
        assert!(serde_yml::from_str::<Certification>("name: AWS SAA\nissuer: Amazon\n").is_err());
    }
}
