use crate::{Error, JavaProcess, ScanWarning, canonical::canonicalize};
use std::{os::unix::ffi::OsStrExt, path::PathBuf};
use tracing::{debug, info};

/// The installation path being checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// As given on the command line.
    pub input: String,
    pub canonical: PathBuf,
}

impl Target {
    pub fn resolve(input: impl Into<String>) -> Result<Self, Error> {
        let input = input.into();
        let canonical = canonicalize(&input)?;
        Ok(Self { input, canonical })
    }

    /// Literal prefix test on the canonical path bytes.
    ///
    /// Not component aware: `/opt/jre1` matches `/opt/jre123/bin/java`.
    pub fn is_prefix_of(&self, process: &JavaProcess) -> bool {
        process.real_path().is_some_and(|path| {
            path.as_os_str()
                .as_bytes()
                .starts_with(self.canonical.as_os_str().as_bytes())
        })
    }
}

/// Everything the report shows, independent of how it is rendered.
#[derive(Debug, Clone)]
pub struct Report {
    pub target: Target,
    /// Absolute launchers under the target, in table order.
    pub matched: Vec<JavaProcess>,
    /// Relative launchers, in table order.
    pub unverifiable: Vec<JavaProcess>,
    /// Absolute launchers outside the target. Never rendered.
    pub unmatched: Vec<JavaProcess>,
    pub warnings: Vec<ScanWarning>,
}

impl Report {
    /// Partition classified processes against `target`.
    pub fn build(target: Target, java: Vec<JavaProcess>, warnings: Vec<ScanWarning>) -> Self {
        let mut matched = Vec::new();
        let mut unverifiable = Vec::new();
        let mut unmatched = Vec::new();

        for process in java {
            if process.is_relative() {
                unverifiable.push(process);
            } else if target.is_prefix_of(&process) {
                debug!(pid = %process.record.pid, exec = %process.exec, "matched");
                matched.push(process);
            } else {
                unmatched.push(process);
            }
        }

        info!(
            java = matched.len() + unverifiable.len() + unmatched.len(),
            matched = matched.len(),
            unverifiable = unverifiable.len(),
            "java processes checked"
        );

        Self {
            target,
            matched,
            unverifiable,
            unmatched,
            warnings,
        }
    }
}
