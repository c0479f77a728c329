//! Error taxonomy
//!
//! Three failure kinds, all under one base [`Error`] so callers can match
//! broadly or specifically: [`ConfigError`] means the requested input does
//! not exist or is not YAML at all, [`DataError`] means the input parsed
//! but the data in it is wrong, and [`TemplateError`] means the template
//! is missing or failed to render. Every error is raised at first
//! detection and propagates unmodified to the CLI boundary.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::yaml::YamlParseError;

/// Base error type for the whole pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] TemplateError),
}

/// The requested input is missing, unreadable, or not parseable as YAML.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("data directory not found: {}", .path.display())]
    #[diagnostic(code(vitae::config::missing_dir))]
    DirNotFound { path: PathBuf },

    #[error("personal info file not found: {}", .path.display())]
    #[diagnostic(
        code(vitae::config::missing_file),
        help("every data directory needs a personal_info.yml")
    )]
    PersonalInfoNotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(vitae::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlParseError),
}

/// The input parsed as YAML but the data in it is wrong.
#[derive(Debug, Error, Diagnostic)]
pub enum DataError {
    #[error("{file} must contain a top-level '{key}' key")]
    #[diagnostic(code(vitae::data::missing_key))]
    MissingKey { file: String, key: &'static str },

    #[error("unexpected top-level key '{found}' in {file}")]
    #[diagnostic(
        code(vitae::data::unexpected_key),
        help("the only key allowed in {file} is '{expected}'")
    )]
    UnexpectedKey {
        file: String,
        found: String,
        expected: &'static str,
    },

    #[error("{file} is present but holds no records")]
    #[diagnostic(
        code(vitae::data::empty_file),
        help("delete the file or add records under its '{key}' key")
    )]
    EmptyFile { file: String, key: &'static str },

    #[error("'{key}' in {file} must be a mapping from record IDs to records")]
    #[diagnostic(code(vitae::data::not_a_mapping))]
    NotAMapping { file: String, key: &'static str },

    #[error("record IDs in {file} must be strings")]
    #[diagnostic(code(vitae::data::invalid_id))]
    NonStringId { file: String },

    #[error("invalid record '{id}' in {file}: {message}")]
    #[diagnostic(code(vitae::data::invalid_record))]
    InvalidRecord {
        file: String,
        id: String,
        message: String,
    },

    #[error("invalid personal info: {message}")]
    #[diagnostic(code(vitae::data::invalid_personal_info))]
    InvalidPersonalInfo { message: String },

    #[error("profile '{name}' not found in shared data")]
    #[diagnostic(
        code(vitae::data::unknown_profile),
        help("run `vitae profiles -d <data-dir>` to list the profiles that exist")
    )]
    UnknownProfile { name: String },

    #[error("profile '{profile}' references unknown {section} ID '{id}'")]
    #[diagnostic(
        code(vitae::data::unknown_reference),
        help("add '{id}' to {section}.yml or drop it from the profile")
    )]
    UnknownReference {
        profile: String,
        section: &'static str,
        id: String,
    },
}

/// The template is missing, failed to parse, or failed during rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum TemplateError {
    #[error("template not found: {}", .path.display())]
    #[diagnostic(code(vitae::template::not_found))]
    NotFound { path: PathBuf },

    #[error("failed to read template {}", .path.display())]
    #[diagnostic(code(vitae::template::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template '{name}'")]
    #[diagnostic(code(vitae::template::parse))]
    Parse {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to render template '{name}'")]
    #[diagnostic(code(vitae::template::render))]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to write output {}", .path.display())]
    #[diagnostic(code(vitae::template::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_convert_into_base() {
        let err: Error = DataError::UnknownProfile {
            name: "MISSING".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Data(_)));
        assert!(err.to_string().contains("MISSING"));
    }

    #[test]
    fn test_unknown_reference_names_everything() {
        let err = DataError::UnknownReference {
            profile: "DEV".to_string(),
            section: "experiences",
            id: "EXP9".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DEV"));
        assert!(msg.contains("experiences"));
        assert!(msg.contains("EXP9"));
    }
}
