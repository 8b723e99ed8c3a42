//! Declutter — sorts a folder into category sub-folders, then runs the
//! divisor self-check in each configured mode.
//!
//! Thin binary entry point. All logic lives in the `declutter-core` crate.

use anyhow::Context;
use declutter_core::config::AppConfig;
use declutter_core::{factor, sorter};
use tracing::{error, info};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialise structured logging once for the whole process.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_owned()))
        .with_target(false)
        .init();

    info!("Declutter starting");

    match sorter::sort_and_prune(&config.sort.root, config.sort.workers) {
        Ok((report, pruned)) => info!(
            "Sorted {}: {} files seen, {} moved, {} failed, {} empty folders removed",
            report.root.display(),
            report.files_seen,
            report.moved,
            report.failed.len(),
            pruned.removed.len()
        ),
        Err(err) => error!("Sorting skipped: {err}"),
    }

    for mode in &config.factor.modes {
        match factor::run_factorization(mode, &config.factor) {
            Ok(_) => {}
            Err(err) if err.is_fatal() => {
                return Err(anyhow::Error::new(err).context("factorization self-check failed"));
            }
            Err(err) => error!("{err}"),
        }
    }

    Ok(())
}
