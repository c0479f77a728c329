//! Hobby record

use serde::{Deserialize, Serialize};
use url::Url;

/// A hobby or interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobby {
    /// Hobby name
    pub name: String,

    /// Related URL, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Url>,
}
