use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use starfall::StarfallError;
use starfall_cli::{Args, ErrorAdapter};

/// Parses `--log-level`, falling back to `warn` for unknown names.
fn init_logging(level: &str) -> LevelFilter {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{level}`, logging at 'warn'");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
    filter
}

fn report(err: &StarfallError) -> String {
    let mut rendered = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut rendered, &ErrorAdapter(err))
        .expect("rendering into a String cannot fail");
    rendered
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = init_logging(&args.log_level);
    info!(log_level:?; "Starting Starfall");
    debug!(args:?; "Parsed arguments");

    match starfall_cli::run(&args) {
        Ok(()) => info!(output:? = args.output; "Backdrop written"),
        Err(err) => {
            error!("Failed\n{}", report(&err));
            process::exit(1);
        }
    }
}
