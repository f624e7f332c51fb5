use std::{io, process::ExitStatus};

/// Represents all fatal errors that can occur in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process listing command could not be started.
    #[error("Failed to run `{program}`: {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The process listing command ran but reported failure.
    #[error("`{program}` exited with {status}: {stderr}")]
    ProcessSnapshot {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The working directory is needed to make a relative path absolute.
    #[error("Failed to read current directory: {0}")]
    CurrentDir(#[source] io::Error),
}
