use crate::{ProcessRecord, ScanWarning, canonical::canonicalize};
use config::Classify;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a Java process's launcher lives on disk, as far as we can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Started through an absolute path, resolved to its canonical form.
    Resolved(PathBuf),
    /// Started through a relative path. The launching process's working
    /// directory is unknown, so the path cannot be resolved.
    Relative,
}

/// A process whose command line starts with a Java launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaProcess {
    pub record: ProcessRecord,
    /// First token of the command line, as written.
    pub exec: String,
    pub location: Location,
}

impl JavaProcess {
    pub fn is_relative(&self) -> bool {
        matches!(self.location, Location::Relative)
    }

    /// Canonical launcher path, if the launcher was given as an absolute path.
    pub fn real_path(&self) -> Option<&Path> {
        match &self.location {
            Location::Resolved(path) => Some(path),
            Location::Relative => None,
        }
    }
}

/// Picks the Java invocations out of a process table.
#[derive(Debug, Clone)]
pub struct Classifier {
    launcher_suffix: String,
}

impl Classifier {
    pub fn new(launcher_suffix: impl Into<String>) -> Self {
        Self {
            launcher_suffix: launcher_suffix.into(),
        }
    }

    pub fn from_config(classify: &Classify) -> Self {
        Self::new(&classify.launcher_suffix)
    }

    /// Whether `exec` names a Java launcher: a plain suffix test on the token.
    pub fn is_java(&self, exec: &str) -> bool {
        exec.ends_with(self.launcher_suffix.as_str())
    }

    /// Keep the Java processes in table order and resolve their launchers.
    ///
    /// Launchers started through a relative path are kept, marked
    /// [`Location::Relative`], and reported in `warnings`.
    pub fn classify(
        &self,
        records: impl IntoIterator<Item = ProcessRecord>,
        warnings: &mut Vec<ScanWarning>,
    ) -> Vec<JavaProcess> {
        let mut java = Vec::new();

        for record in records {
            let exec = record.exec_token();
            debug!(command = %exec, "checking command");
            if !self.is_java(exec) {
                debug!(cmd = %record.cmd, "not a java process, skipping");
                continue;
            }
            let exec = exec.to_owned();

            let location = if exec.starts_with('/') {
                // absolute input never needs the current directory
                match canonicalize(&exec) {
                    Ok(path) => Location::Resolved(path),
                    Err(err) => {
                        warn!(pid = %record.pid, error = %err, "failed to resolve java path");
                        Location::Resolved(PathBuf::from(&exec))
                    }
                }
            } else {
                let warning = ScanWarning::RelativeExecutable {
                    pid: record.pid.clone(),
                    exec: exec.clone(),
                    cmd: record.cmd.clone(),
                };
                warn!("{warning}");
                warnings.push(warning);
                Location::Relative
            };

            java.push(JavaProcess {
                record,
                exec,
                location,
            });
        }

        java
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&Classify::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn record(pid: &str, cmd: &str) -> ProcessRecord {
        let line = format!("app {pid} 1 0 09:14 ? 00:00:01 {cmd}");
        ProcessRecord::parse(&line).unwrap()
    }

    #[test]
    fn suffix_rule() {
        let classifier = Classifier::default();
        assert!(classifier.is_java("/usr/bin/java"));
        assert!(classifier.is_java("/opt/jdk/bin/java"));
        assert!(classifier.is_java("alljava"));
        assert!(classifier.is_java("java"));
        assert!(!classifier.is_java("/usr/bin/python"));
        assert!(!classifier.is_java("/usr/bin/Java"));
        assert!(!classifier.is_java("/usr/bin/javac"));
    }

    #[test]
    fn keeps_order_and_flags_relative_launchers() {
        let records = vec![
            record("10", "/usr/bin/python3 -m http.server"),
            record("11", "/nonexistent/jre/bin/java -jar a.jar"),
            record("12", "java -cp . Main"),
            record("13", "./bin/java -version"),
        ];
        let mut warnings = Vec::new();

        let java = Classifier::default().classify(records, &mut warnings);

        let pids: Vec<_> = java.iter().map(|p| p.record.pid.as_str()).collect();
        assert_eq!(pids, vec!["11", "12", "13"]);

        assert_eq!(
            java[0].location,
            Location::Resolved(PathBuf::from("/nonexistent/jre/bin/java"))
        );
        assert!(!java[0].is_relative());
        assert_eq!(java[1].exec, "java");
        assert!(java[1].is_relative());
        assert_eq!(java[1].real_path(), None);
        assert!(java[2].is_relative());

        assert_eq!(
            warnings,
            vec![
                ScanWarning::RelativeExecutable {
                    pid: "12".into(),
                    exec: "java".into(),
                    cmd: "java -cp . Main".into(),
                },
                ScanWarning::RelativeExecutable {
                    pid: "13".into(),
                    exec: "./bin/java".into(),
                    cmd: "./bin/java -version".into(),
                },
            ]
        );
    }

    #[test]
    fn only_the_first_token_decides() {
        let records = vec![record("20", "/bin/sh -c /usr/bin/java")];
        let java = Classifier::default().classify(records, &mut Vec::new());
        assert!(java.is_empty());
    }

    #[test]
    fn custom_suffix() {
        let classifier = Classifier::new("javaw");
        assert!(classifier.is_java("/opt/jre/bin/javaw"));
        assert!(!classifier.is_java("/opt/jre/bin/java"));
    }

    proptest! {
        #[test]
        fn any_token_ending_in_java_is_accepted(prefix in "[a-zA-Z0-9/._-]{0,24}") {
            let classifier = Classifier::default();
            let exec = format!("{prefix}java");
            prop_assert!(classifier.is_java(&exec));

            let java = classifier.classify([record("1", &exec)], &mut Vec::new());
            prop_assert_eq!(java.len(), 1);
            prop_assert_eq!(java[0].is_relative(), !exec.starts_with('/'));
        }

        #[test]
        fn tokens_not_ending_in_java_are_rejected(exec in "[a-zA-Z0-9/._-]{1,24}") {
            prop_assume!(!exec.ends_with("java"));
            let java = Classifier::default().classify([record("1", &exec)], &mut Vec::new());
            prop_assert!(java.is_empty());
        }
    }
}
