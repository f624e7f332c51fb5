#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Classify {
    /// Suffix an executable token must end with to count as a Java launcher.
    ///
    /// Matched case-sensitively against the whole token, so `alljava` counts.
    pub launcher_suffix: String,
}

impl Default for Classify {
    fn default() -> Self {
        Self {
            launcher_suffix: "java".into(),
        }
    }
}
