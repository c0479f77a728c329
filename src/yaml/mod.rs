//! YAML parsing with span-carrying diagnostics

pub mod diagnostics;

pub use diagnostics::YamlParseError;

use serde::de::DeserializeOwned;
use serde_yml::Value;

/// Parse YAML source into a typed value, attaching the source text and
/// error location to any syntax failure.
pub fn parse_str<T: DeserializeOwned + 'static>(content: &str, name: &str) -> Result<T, YamlParseError> {
    serde_yml::from_str(content).map_err(|err| YamlParseError::new(&err, content, name))
}

/// Parse YAML source into a generic [`Value`] tree.
///
/// This is the first half of the dynamic-to-static boundary: syntax errors
/// are caught here, schema errors when subtrees are converted into records.
pub fn parse_value(content: &str, name: &str) -> Result<Value, YamlParseError> {
    parse_str(content, name)
}
