use clap::{
    Parser,
    builder::{PossibleValuesParser, TypedValueParser},
};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::ColorMode;
use std::path::{Path, PathBuf};

/// jre-usage-check: find the processes still running from a JRE
///
/// Lists every running process, picks out the Java launchers, resolves their
/// paths through all symlinks, and reports the ones that live under the
/// given installation path. Launchers started through a relative path are
/// listed separately since their location cannot be verified.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// JRE installation path (or path prefix) to check.
    #[arg(value_name = "JRE_PATH", allow_hyphen_values = true)]
    pub jre_path: String,

    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// When to color the report. Overrides the configuration file.
    #[arg(
        long,
        value_name = "WHEN",
        value_parser = PossibleValuesParser::new(["auto", "always", "never"])
            .try_map(|mode| mode.parse::<ColorMode>()),
    )]
    pub color: Option<ColorMode>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

/// One-line usage printed when the positional argument count is wrong.
pub fn usage(program: &str) -> String {
    format!("usage: {program} <JRE Path to check>")
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}
