//! Find the running Java processes that launch from a given JRE installation.

mod canonical;
mod classify;
mod error;
mod lister;
mod matcher;
mod record;
mod warning;

pub use canonical::canonicalize;
pub use classify::{Classifier, JavaProcess, Location};
pub use error::Error;
pub use lister::{ProcessSource, PsCommand, Snapshot, StaticSource, list_processes};
pub use matcher::{Report, Target};
pub use record::{FIELD_COUNT, ProcessRecord, split_fields};
pub use warning::ScanWarning;

use config::Config;
use tracing::debug;

/// Run one full check of `target` against the processes `source` reports.
///
/// The target path is resolved first, so an unusable working directory
/// fails the run before the process table is read.
pub fn check(target: &str, source: &dyn ProcessSource, config: &Config) -> Result<Report, Error> {
    scan(Target::resolve(target)?, source, config)
}

/// Check an already resolved `target` against the processes `source` reports.
pub fn scan(target: Target, source: &dyn ProcessSource, config: &Config) -> Result<Report, Error> {
    debug!(input = %target.input, canonical = %target.canonical.display(), "checking target");

    let Snapshot {
        records,
        mut warnings,
    } = list_processes(source, config.scan.header_lines)?;

    let java = Classifier::from_config(&config.classify).classify(records, &mut warnings);
    Ok(Report::build(target, java, warnings))
}
