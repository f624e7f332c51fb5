pub mod cli;
pub mod error;
pub mod render;

use clap::{Parser, error::ErrorKind};
use cli::{Cli, usage};
use config::{ColorMode, Config};
use error::Error;
use procscan::{ProcessSource, Target};
use std::{
    ffi::OsString,
    io::{self, Write},
};

/// What `main` should do after reading its arguments.
#[derive(Debug)]
pub enum Invocation {
    Check(Cli),
    Exit(i32),
}

/// Parse `args` (program name first), writing usage or help to `stdout`.
///
/// A wrong positional count prints the one-line usage and asks for exit
/// status 1. A lone argument is always taken as the path, even when it
/// looks like a flag.
pub fn parse_args<I, T>(args: I, stdout: &mut impl Write) -> io::Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let err = match Cli::try_parse_from(&args) {
        Ok(cli) => return Ok(Invocation::Check(cli)),
        Err(err) => err,
    };

    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        write!(stdout, "{}", err.render())?;
        return Ok(Invocation::Exit(0));
    }

    if let [program, path] = args.as_slice() {
        let escaped = [program.clone(), OsString::from("--"), path.clone()];
        if let Ok(cli) = Cli::try_parse_from(escaped) {
            return Ok(Invocation::Check(cli));
        }
    }

    err.print()?;
    let program = args
        .first()
        .map(|program| program.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());
    writeln!(stdout, "{}", usage(&program))?;
    Ok(Invocation::Exit(1))
}

/// Apply the color policy to the process-wide `colored` override.
pub fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => colored::control::unset_override(),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}

/// Check `jre_path` against the processes from `source` and write the report.
///
/// The target echo is written and flushed before the process table is read,
/// so it is on `out` even when the snapshot fails.
pub fn run(
    jre_path: &str,
    source: &dyn ProcessSource,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), Error> {
    let target = Target::resolve(jre_path)?;
    render::render_target(&target, out)?;
    out.flush()?;

    let report = procscan::scan(target, source, config)?;
    render::render(&report, config.report.rule_width, out)?;
    out.flush()?;
    Ok(())
}
