#![warn(clippy::all, clippy::pedantic)]

use clap::Parser;
use idbctl::cli::Cli;
use idbctl::error::{CommandError, IdbError};
use idbctl::ui::style as ui;
use idbctl::{Config, app};
use std::process::ExitCode;
use tracing::{Level, debug};

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit 2 from here, before any command logic runs.
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => return report(&IdbError::from(err)),
    };

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.tracing_level()
    };
    if let Err(err) = app::init_logging(level) {
        return report(&IdbError::from(err));
    }
    debug!(path = %config.config_path.display(), backend = %config.client.backend, "config loaded");

    match app::dispatch(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &IdbError) -> ExitCode {
    match err {
        IdbError::Command(CommandError::MissingScheme) => {
            println!(
                "You need to specify {} when approving url permissions",
                ui::yellow("--scheme")
            );
        }
        _ => eprintln!("{} {}", ui::error("error:"), app::render_error(err)),
    }
    ExitCode::from(err.exit_code())
}
