//! YAML error diagnostics with source spans

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// YAML syntax error pointing at the offending location in the source file.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid YAML in {name}")]
#[diagnostic(code(vitae::yaml::syntax))]
pub struct YamlParseError {
    name: String,

    #[source_code]
    src: NamedSource<String>,

    #[label("{message}")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl YamlParseError {
    /// Wrap a serde_yml error with the source it came from.
    pub fn new(err: &serde_yml::Error, source: &str, name: &str) -> Self {
        let offset = err
            .location()
            .map(|loc| loc.index())
            .unwrap_or(0)
            .min(source.len());
        let end = (offset + 1).min(source.len());
        let message = err.to_string();
        let help = hint_for(&message);

        Self {
            name: name.to_string(),
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from(offset..end),
            help,
            message,
        }
    }

    /// The underlying parser message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Suggest a fix for the YAML mistakes people actually make.
fn hint_for(message: &str) -> Option<String> {
    let msg = message.to_lowercase();

    if msg.contains("tab") {
        return Some("indent with spaces; YAML does not allow tabs".to_string());
    }

    if msg.contains("duplicate") {
        return Some("each key may appear only once per mapping".to_string());
    }

    if msg.contains("mapping values are not allowed") {
        return Some("a value containing ':' probably needs quoting".to_string());
    }

    if msg.contains("block end") {
        return Some("check for inconsistent indentation above this line".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_known_messages() {
        assert!(hint_for("found a tab character").is_some());
        assert!(hint_for("duplicate entry").is_some());
        assert!(hint_for("mapping values are not allowed here").is_some());
        assert!(hint_for("something else entirely").is_none());
    }

    #[test]
    fn test_error_carries_name_and_message() {
        let err = serde_yml::from_str::<serde_yml::Value>("a: [1,").unwrap_err();
        let diag = YamlParseError::new(&err, "a: [1,", "data.yml");
        assert!(diag.to_string().contains("data.yml"));
        assert!(!diag.message().is_empty());
    }
}
