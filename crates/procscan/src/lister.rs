use crate::{Error, ProcessRecord, ScanWarning};
use config::Scan;
use std::process::{Command, Stdio};
use tracing::{debug, trace, warn};

/// Produces the raw text of a `ps -ef` style process table.
pub trait ProcessSource {
    /// Take a snapshot of every running process, header included.
    fn snapshot(&self) -> Result<String, Error>;
}

/// Runs an external command and returns what it printed.
#[derive(Debug, Clone)]
pub struct PsCommand {
    program: String,
    args: Vec<String>,
}

impl PsCommand {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(scan: &Scan) -> Self {
        Self::new(&scan.program, &scan.args)
    }
}

impl Default for PsCommand {
    fn default() -> Self {
        Self::from_config(&Scan::default())
    }
}

impl ProcessSource for PsCommand {
    fn snapshot(&self) -> Result<String, Error> {
        debug!(program = %self.program, args = ?self.args, "taking process snapshot");
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::ProcessSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ProcessSnapshot {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// A fixed process table, for feeding synthetic snapshots.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(String);

impl StaticSource {
    pub fn new(table: impl Into<String>) -> Self {
        Self(table.into())
    }
}

impl ProcessSource for StaticSource {
    fn snapshot(&self) -> Result<String, Error> {
        Ok(self.0.clone())
    }
}

/// Parsed process table plus the rows that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub records: Vec<ProcessRecord>,
    pub warnings: Vec<ScanWarning>,
}

/// Take a snapshot from `source` and parse its data rows in table order.
///
/// The first `header_lines` lines are dropped. Malformed rows are skipped
/// with a warning, everything else is kept.
pub fn list_processes(source: &dyn ProcessSource, header_lines: usize) -> Result<Snapshot, Error> {
    let table = source.snapshot()?;
    Ok(parse_table(&table, header_lines))
}

pub(crate) fn parse_table(table: &str, header_lines: usize) -> Snapshot {
    let mut snapshot = Snapshot::default();
    let table = table.trim();
    if table.is_empty() {
        return snapshot;
    }

    for line in table.lines().skip(header_lines) {
        match ProcessRecord::parse(line) {
            Ok(record) => {
                trace!(pid = %record.pid, cmd = %record.cmd, "parsed process");
                snapshot.records.push(record);
            }
            Err(warning) => {
                warn!("{warning}");
                snapshot.warnings.push(warning);
            }
        }
    }

    debug!(
        processes = snapshot.records.len(),
        skipped = snapshot.warnings.len(),
        "process table parsed"
    );
    snapshot
}
