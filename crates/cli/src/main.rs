use config::Config;
use jre_usage_check::{Invocation, apply_color_mode, parse_args, run};
use procscan::PsCommand;
use std::io;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = match parse_args(std::env::args_os(), &mut io::stdout())? {
        Invocation::Check(cli) => cli,
        Invocation::Exit(code) => std::process::exit(code),
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.verbosity.tracing_level_filter())
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };
    debug!(?config, "loaded config");

    apply_color_mode(cli.color.unwrap_or(config.report.color));

    let source = PsCommand::from_config(&config.scan);
    let stdout = io::stdout();
    if let Err(err) = run(&cli.jre_path, &source, &config, &mut stdout.lock()) {
        tracing::error!(error = %err, "check failed");
        return Err(err.into());
    }
    Ok(())
}
