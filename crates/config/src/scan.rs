#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Scan {
    /// Program that prints the process table in `ps -ef` layout.
    pub program: String,

    /// Arguments passed to `program`.
    pub args: Vec<String>,

    /// Leading lines of the listing that are column headers.
    pub header_lines: usize,
}

impl Default for Scan {
    fn default() -> Self {
        Self {
            program: "ps".into(),
            args: vec!["-ef".into()],
            header_lines: 1,
        }
    }
}
