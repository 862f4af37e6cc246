//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use fastlike_core::Pattern;
use fastlike_orchestration::interfaces::ResultPresenter;
use fastlike_orchestration::orchestrator::{analyze_comparison_results, run_strategies};

use crate::config::AppConfig;
use crate::corpus::read_corpus;
use crate::output::{is_stdout, write_counts_to};
use crate::presenter::CLIResultPresenter;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let pattern = Pattern::new(config.pattern.as_str())
        .with_context(|| format!("invalid pattern {:?}", config.pattern))?;
    let strategies = config.strategies()?;
    let opts = config.options();

    let corpus = read_corpus(&config.file)
        .with_context(|| format!("cannot read corpus {}", config.file.display()))?;
    debug!(
        path = %config.file.display(),
        lines = corpus.len(),
        pattern = %pattern,
        threads = opts.threads,
        "corpus loaded"
    );

    let reports = run_strategies(&corpus, &pattern, &strategies, &opts)?;
    let Some(primary) = reports.first() else {
        return Ok(());
    };

    // Counts written to stdout are the whole output; the summary would
    // interleave with them.
    let counts_to_stdout = config.output.as_deref().is_some_and(is_stdout);
    if !counts_to_stdout {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
        if config.quiet {
            presenter.present_report(primary);
        } else {
            for report in &reports {
                presenter.present_report(report);
            }
        }
        if reports.len() > 1 {
            presenter.present_comparison(&reports);
        }
    }

    if reports.len() > 1 {
        analyze_comparison_results(&reports)?;
    }

    if let Some(ref path) = config.output {
        write_counts_to(path, &primary.counts)
            .with_context(|| format!("cannot write counts to {}", path.display()))?;
    }

    Ok(())
}
