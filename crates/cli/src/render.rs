use colored::Colorize;
use procscan::{JavaProcess, Location, Report, Target};
use std::io::{self, Write};

// Wording below is the established report output, misspellings included.

/// Echo the path being checked. Written before the process table is read.
pub fn render_target(target: &Target, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Checking if any process is running with the jar path: '{}' (orignal input: '{}')",
        target.canonical.display(),
        target.input
    )
}

/// Write the report body, from the summary header to the closing marker.
///
/// This module is the only place that emits color; whether sequences are
/// actually produced follows `colored`'s global override.
pub fn render(report: &Report, rule_width: usize, out: &mut impl Write) -> io::Result<()> {
    let target = &report.target;
    let canonical = target.canonical.display();
    let rule = "-".repeat(rule_width);

    writeln!(out, "{}\n", "Summary".green())?;
    writeln!(out, "The inputed JRE path: {}", target.input)?;
    writeln!(out, "final full JRE path: {canonical}")?;
    writeln!(out, "\nThe processes that use this JRE:\n")?;

    if report.matched.is_empty() {
        writeln!(out, "Not Found")?;
    }
    for process in &report.matched {
        entry(process, &rule, out)?;
    }

    writeln!(
        out,
        "\n\n{}\n",
        "The processes that are not absolute path (if has any output must check with the user as the relative path can't be evaluated):"
            .yellow()
    )?;
    for process in &report.unverifiable {
        entry(process, &rule, out)?;
    }

    writeln!(out, "\n\n{}", "Done".green())
}

fn entry(process: &JavaProcess, rule: &str, out: &mut impl Write) -> io::Result<()> {
    let record = &process.record;
    writeln!(out, "User: {}", record.user.blue())?;
    writeln!(out, "Process PID: {}", record.pid)?;
    match &process.location {
        Location::Resolved(path) => writeln!(
            out,
            "JRE Actual Path: {}",
            path.display().to_string().magenta()
        )?,
        Location::Relative => writeln!(
            out,
            "JRE Actual Path: {} (relative, cannot resolve)",
            process.exec
        )?,
    }
    writeln!(out, "ps -ef Info: {}", record.line)?;
    writeln!(out, "{rule}")
}
