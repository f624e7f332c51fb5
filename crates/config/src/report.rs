#![forbid(unsafe_code)]

use crate::color_mode::ColorMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Report {
    pub color: ColorMode,

    /// Width of the `-` rule printed after each process entry.
    pub rule_width: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            rule_width: 80,
        }
    }
}
