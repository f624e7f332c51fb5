use crate::ScanWarning;

/// Number of columns in a `ps -ef` row. The last one is the command line.
pub const FIELD_COUNT: usize = 8;

/// One row of the process table.
///
/// Every column is kept as text: nothing here is used arithmetically and
/// `ps` implementations disagree on how some of them are formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub user: String,
    pub pid: String,
    pub ppid: String,
    pub cpu: String,
    pub stime: String,
    pub tty: String,
    pub time: String,
    /// Command plus arguments, with internal whitespace preserved.
    pub cmd: String,
    /// The row exactly as `ps` printed it.
    pub line: String,
}

impl ProcessRecord {
    /// Parse a single data row.
    ///
    /// ```
    /// # use procscan::ProcessRecord;
    /// let rec = ProcessRecord::parse(
    ///     "tomcat  812  1  0 09:14 ?  00:01:02 /opt/jre/bin/java -Xmx1g  -jar app.jar",
    /// )
    /// .unwrap();
    /// assert_eq!(rec.pid, "812");
    /// assert_eq!(rec.cmd, "/opt/jre/bin/java -Xmx1g  -jar app.jar");
    /// ```
    pub fn parse(line: &str) -> Result<Self, ScanWarning> {
        let fields = split_fields(line, FIELD_COUNT);
        let &[user, pid, ppid, cpu, stime, tty, time, cmd] = fields.as_slice() else {
            return Err(ScanWarning::MalformedLine {
                line: line.to_owned(),
                fields: fields.len(),
            });
        };

        Ok(Self {
            user: user.to_owned(),
            pid: pid.to_owned(),
            ppid: ppid.to_owned(),
            cpu: cpu.to_owned(),
            stime: stime.to_owned(),
            tty: tty.to_owned(),
            time: time.to_owned(),
            cmd: cmd.to_owned(),
            line: line.to_owned(),
        })
    }

    /// First whitespace-delimited token of the command line.
    pub fn exec_token(&self) -> &str {
        self.cmd.split_whitespace().next().unwrap_or_default()
    }
}

/// Split `line` on runs of whitespace into at most `max` fields.
///
/// Leading whitespace is ignored. The last field takes the rest of the line
/// with its leading whitespace removed and everything else kept verbatim.
pub fn split_fields(line: &str, max: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(max);
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        if fields.len() + 1 == max {
            fields.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn parses_every_column() {
        let line = "root       1     0  0 Oct18 ?        00:00:04 /sbin/init splash";
        let rec = ProcessRecord::parse(line).unwrap();

        assert_eq!(
            rec,
            ProcessRecord {
                user: "root".into(),
                pid: "1".into(),
                ppid: "0".into(),
                cpu: "0".into(),
                stime: "Oct18".into(),
                tty: "?".into(),
                time: "00:00:04".into(),
                cmd: "/sbin/init splash".into(),
                line: line.into(),
            }
        );
        assert_eq!(rec.exec_token(), "/sbin/init");
    }

    #[test]
    fn short_line_is_reported_with_field_count() {
        let line = "root 1 0 0 Oct18 ? 00:00:04";
        assert_eq!(
            ProcessRecord::parse(line),
            Err(ScanWarning::MalformedLine {
                line: line.into(),
                fields: 7,
            })
        );
    }

    #[test]
    fn split_fields_matches_bounded_whitespace_split() {
        assert_eq!(split_fields("  a  b   c d  ", 3), vec!["a", "b", "c d  "]);
        assert_eq!(split_fields("a b", 3), vec!["a", "b"]);
        assert_eq!(split_fields("a b   ", 3), vec!["a", "b"]);
        assert!(split_fields("   ", 3).is_empty());
    }

    const WORD: &str = "[a-zA-Z0-9:?/._-]{1,12}";

    proptest! {
        #[test]
        fn command_field_survives_verbatim(
            cols in prop::collection::vec(WORD, 7),
            args in prop::collection::vec(WORD, 1..6),
            gap in "[ \t]{1,4}",
        ) {
            let cmd = args.join(&gap);
            let line = format!("{} {}", cols.join("  "), cmd);

            let rec = ProcessRecord::parse(&line).unwrap();
            prop_assert_eq!(&rec.cmd, &cmd);
            prop_assert_eq!(&rec.line, &line);
            prop_assert_eq!(rec.user.as_str(), cols[0].as_str());
            prop_assert_eq!(rec.time.as_str(), cols[6].as_str());
        }

        #[test]
        fn fewer_than_eight_fields_is_rejected(cols in prop::collection::vec(WORD, 0..8)) {
            let line = cols.join(" ");
            let res = ProcessRecord::parse(&line);
            prop_assert_eq!(
                res,
                Err(ScanWarning::MalformedLine { line: line.clone(), fields: cols.len() })
            );
        }
    }
}
