//! YAML loading and per-file validation
//!
//! Each well-known file in the data directory is parsed and validated
//! independently; cross-file reference resolution happens afterwards in
//! [`crate::core::context`]. Keeping the two apart means a broken file and
//! a broken reference fail with distinct, diagnosable errors.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::core::error::{ConfigError, DataError, Error};
use crate::entities::{PersonalInfo, SharedData};
use crate::yaml;

/// The one required file in every data directory.
pub const PERSONAL_INFO_FILE: &str = "personal_info.yml";

/// Load and validate `personal_info.yml` from the data directory.
///
/// The file must exist and contain a top-level `personal_info` key.
pub fn load_personal_info(data_dir: &Path) -> Result<PersonalInfo, Error> {
    let path = data_dir.join(PERSONAL_INFO_FILE);
    if !path.exists() {
        return Err(ConfigError::PersonalInfoNotFound { path }.into());
    }

    let content = read_file(&path)?;
    let value = yaml::parse_value(&content, PERSONAL_INFO_FILE).map_err(ConfigError::from)?;

    let info = value
        .get("personal_info")
        .ok_or(DataError::MissingKey {
            file: PERSONAL_INFO_FILE.to_string(),
            key: "personal_info",
        })?;

    serde_yml::from_value(info.clone())
        .map_err(|err| {
            DataError::InvalidPersonalInfo {
                message: err.to_string(),
            }
            .into()
        })
}

/// Load every shared-data file that exists in the data directory.
///
/// Absent files are skipped silently; a pool simply stays empty. A file
/// that is present but empty, missing its top-level key, or holding an
/// invalid record is a hard stop naming the file (and record) at fault.
pub fn load_shared_data(data_dir: &Path) -> Result<SharedData, Error> {
    if !data_dir.is_dir() {
        return Err(ConfigError::DirNotFound {
            path: data_dir.to_path_buf(),
        }
        .into());
    }

    Ok(SharedData {
        experiences: load_pool(data_dir, "experiences")?,
        projects: load_pool(data_dir, "projects")?,
        education: load_pool(data_dir, "education")?,
        certifications: load_pool(data_dir, "certifications")?,
        research_papers: load_pool(data_dir, "research_papers")?,
        clubs_and_associations: load_pool(data_dir, "clubs_and_associations")?,
        hobbies: load_pool(data_dir, "hobbies")?,
        profiles: load_pool(data_dir, "profiles")?,
    })
}

/// Load one `<key>.yml` pool file into an ID → record mapping.
///
/// The file's top-level key must equal the filename stem; every value
/// under it is validated as a record of type `T`, failing fast on the
/// first bad item.
fn load_pool<T: DeserializeOwned + 'static>(
    data_dir: &Path,
    key: &'static str,
) -> Result<BTreeMap<String, T>, Error> {
    let file = format!("{key}.yml");
    let path = data_dir.join(&file);
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = read_file(&path)?;
    let value = yaml::parse_value(&content, &file).map_err(ConfigError::from)?;

    if value.is_null() {
        return Err(DataError::EmptyFile { file, key }.into());
    }

    let top = value
        .as_mapping()
        .ok_or_else(|| DataError::MissingKey {
            file: file.clone(),
            key,
        })?;

    for found in top.keys() {
        if found.as_str() != key {
            return Err(DataError::UnexpectedKey {
                file,
                found: yaml_key_to_string(found),
                expected: key,
            }
            .into());
        }
    }

    let section = top
        .get(key)
        .ok_or_else(|| DataError::MissingKey {
            file: file.clone(),
            key,
        })?;

    if section.is_null() {
        return Err(DataError::EmptyFile { file, key }.into());
    }

    let records = section
        .as_mapping()
        .ok_or_else(|| DataError::NotAMapping {
            file: file.clone(),
            key,
        })?;

    let mut pool = BTreeMap::new();
    for (id, record) in records {
        let id = id.as_str();
        let record: T = serde_yml::from_value(record.clone()).map_err(|err| {
            DataError::InvalidRecord {
                file: file.clone(),
                id: id.to_string(),
                message: err.to_string(),
            }
        })?;
        pool.insert(id.to_string(), record);
    }

    Ok(pool)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn yaml_key_to_string(key: &str) -> String {
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ConfigError, DataError, Error};
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_personal_info_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let err = load_personal_info(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::PersonalInfoNotFound { .. })
        ));
        let expected = dir.path().join(PERSONAL_INFO_FILE);
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn test_personal_info_success() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            PERSONAL_INFO_FILE,
            "personal_info:\n  name: John Doe\n  email: john@example.com\n  location: NYC\n",
        );

        let info = load_personal_info(dir.path()).unwrap();
        assert_eq!(info.name, "John Doe");
        assert_eq!(info.email.as_deref(), Some("john@example.com"));
        assert_eq!(info.location.as_deref(), Some("NYC"));
    }

    #[test]
    fn test_personal_info_invalid_yaml_is_config_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), PERSONAL_INFO_FILE, "name: [unclosed\n");
        let err = load_personal_info(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_personal_info_missing_key_is_data_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), PERSONAL_INFO_FILE, "wrong_key:\n  name: Test\n");
        let err = load_personal_info(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Data(DataError::MissingKey { .. })));
    }

    #[test]
    fn test_personal_info_validation_failure_is_data_error() {
        let dir = tempdir().unwrap();
        // Required 'name' field absent
        write(
            dir.path(),
            PERSONAL_INFO_FILE,
            "personal_info:\n  email: test@example.com\n",
        );
        let err = load_personal_info(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Data(DataError::InvalidPersonalInfo { .. })
        ));
    }

    #[test]
    fn test_shared_data_missing_dir_is_config_error() {
        let err = load_shared_data(Path::new("/nonexistent/data")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::DirNotFound { .. })));
    }

    #[test]
    fn test_shared_data_absent_files_leave_pools_empty() {
        let dir = tempdir().unwrap();
        let shared = load_shared_data(dir.path()).unwrap();
        assert!(shared.experiences.is_empty());
        assert!(shared.profiles.is_empty());
        assert_eq!(shared.record_count(), 0);
    }

    #[test]
    fn test_shared_data_loads_present_files() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "experiences.yml",
            "experiences:\n  EXP1:\n    title: Engineer\n    company: TechCo\n    date: '2020'\n",
        );
        write(
            dir.path(),
            "profiles.yml",
            "profiles:\n  DEV:\n    title: Developer\n    summary: Ships code.\n    experiences: [EXP1]\n",
        );

        let shared = load_shared_data(dir.path()).unwrap();
        assert_eq!(shared.experiences.len(), 1);
        assert_eq!(shared.experiences["EXP1"].title, "Engineer");
        assert_eq!(shared.profiles["DEV"].experiences, vec!["EXP1"]);
        assert!(shared.hobbies.is_empty());
    }

    #[test]
    fn test_shared_data_empty_file_is_data_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), "projects.yml", "");
        let err = load_shared_data(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Data(DataError::EmptyFile { .. })));
        assert!(err.to_string().contains("projects.yml"));
    }

    #[test]
    fn test_shared_data_wrong_top_level_key_is_data_error() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "hobbies.yml",
            "interests:\n  H1:\n    name: Chess\n",
        );
        let err = load_shared_data(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Data(DataError::UnexpectedKey { .. })));
    }

    #[test]
    fn test_shared_data_non_mapping_section_is_data_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), "hobbies.yml", "hobbies:\n  - Chess\n  - Go\n");
        let err = load_shared_data(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Data(DataError::NotAMapping { .. })));
    }

    #[test]
    fn test_shared_data_invalid_record_names_file_and_id() {
        let dir = tempdir().unwrap();
        // EXP2 is missing the required 'company' field
        write(
            dir.path(),
            "experiences.yml",
            "experiences:\n  EXP1:\n    title: A\n    company: B\n    date: '2020'\n  EXP2:\n    title: C\n    date: '2021'\n",
        );
        let err = load_shared_data(dir.path()).unwrap_err();
        match err {
            Error::Data(DataError::InvalidRecord { file, id, .. }) => {
                assert_eq!(file, "experiences.yml");
                assert_eq!(id, "EXP2");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_shared_data_invalid_url_in_record_fails() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "certifications.yml",
            "certifications:\n  C1:\n    name: Cert\n    issuer: Org\n    credential_link: nonsense\n",
        );
        let err = load_shared_data(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Data(DataError::InvalidRecord { .. })));
    }
}
