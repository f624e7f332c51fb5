use std::fmt;

/// Recoverable conditions met while scanning.
///
/// These never abort a run. They are logged when raised and handed back to
/// the caller next to the results they affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// A process table line split into fewer than eight fields.
    MalformedLine { line: String, fields: usize },

    /// A Java launcher was started through a relative path, so the
    /// installation it runs from cannot be determined.
    RelativeExecutable {
        pid: String,
        exec: String,
        cmd: String,
    },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line, fields } => write!(
                f,
                "Line skipped due to insufficient parts: '{line}' after split, \
                 expect to have 8 parts, but now it is {fields}"
            ),
            Self::RelativeExecutable { pid, exec, cmd } => write!(
                f,
                "The command '{cmd}' (pid {pid}) starts java through '{exec}', \
                 which is not an absolute path, so we can't get the real path of jre"
            ),
        }
    }
}
