//! LaTeX escaping, exposed to templates as the `latex_escape` filter
//!
//! Templates decide what to escape; nothing is escaped automatically.

use std::collections::HashMap;

use serde_json::Value;

/// Ordered substitution list. Backslash must come first so the backslashes
/// inserted by later substitutions are not themselves re-escaped.
const REPLACEMENTS: [(&str, &str); 10] = [
    ("\\", "\\textbackslash{}"),
    ("&", "\\&"),
    ("%", "\\%"),
    ("$", "\\$"),
    ("#", "\\#"),
    ("_", "\\_"),
    ("{", "\\{"),
    ("}", "\\}"),
    ("~", "\\textasciitilde{}"),
    ("^", "\\^{}"),
];

/// Escape the characters LaTeX reserves so literal user data renders as-is.
pub fn escape(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in REPLACEMENTS {
        out = out.replace(from, to);
    }
    out
}

/// Tera filter wrapper around [`escape`].
pub fn tera_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value.as_str() {
        Some(text) => Ok(Value::String(escape(text))),
        None => Err(tera::Error::msg(
            "the latex_escape filter can only be applied to strings",
        )),
    }
}
