//! fastlike: wildcard LIKE matching over a text corpus.

use std::process::ExitCode;

use fastlike_lib::presenter::CLIResultPresenter;
use fastlike_lib::{app, config, errors};
use fastlike_orchestration::interfaces::ResultPresenter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
            presenter.present_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
