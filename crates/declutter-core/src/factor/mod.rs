/// Factorization engine — divisor lists computed linearly or on a worker pool,
/// then checked against an expected table.
///
/// Both strategies share one shape, `&[u64] -> Vec<Vec<u64>>` in input order;
/// [`FactorMode`] picks between them at the call site.
pub mod divisors;
pub mod parallel;

use crate::config::FactorConfig;
use crate::error::{DeclutterError, Result};
use crate::workers::build_pool;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{error, info};

pub use divisors::divisors;
pub use parallel::factorize_parallel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorMode {
    Linear,
    Parallel,
}

impl FactorMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for FactorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FactorMode {
    type Err = DeclutterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(Self::Linear),
            "parallel" => Ok(Self::Parallel),
            other => Err(DeclutterError::InvalidMode(other.to_string())),
        }
    }
}

/// Factorize each number in turn on the calling thread.
pub fn factorize_linear(numbers: &[u64]) -> Vec<Vec<u64>> {
    numbers.iter().map(|&n| divisors::factor_task(n)).collect()
}

/// Outcome of one checked factorization run.
#[derive(Debug, Clone)]
pub struct FactorRun {
    pub mode: FactorMode,
    /// Pool size, for parallel runs only.
    pub workers: Option<usize>,
    pub results: Vec<Vec<u64>>,
    pub elapsed: Duration,
}

/// Compare each computed list with the expected list at the same position.
///
/// The first mismatch, or a number with no expected entry, fails naming
/// that input number.
pub fn self_check(numbers: &[u64], results: &[Vec<u64>], expected: &[Vec<u64>]) -> Result<()> {
    for (i, &number) in numbers.iter().enumerate() {
        let got = results.get(i);
        let want = expected.get(i);
        if got != want {
            error!("Factorization error for number {number}: expected {want:?}, got {got:?}");
            return Err(DeclutterError::SelfCheck { number });
        }
    }
    Ok(())
}

/// Run one factorization in the named mode and self-check the output.
///
/// An unknown `mode` is [`DeclutterError::InvalidMode`] and does nothing.
/// A failed check is [`DeclutterError::SelfCheck`], which callers treat as
/// fatal.
pub fn run_factorization(mode: &str, config: &FactorConfig) -> Result<FactorRun> {
    let mode: FactorMode = mode.parse()?;
    info!("Running in {mode} mode...");

    let start = Instant::now();
    let (results, workers) = match mode {
        FactorMode::Linear => (factorize_linear(&config.numbers), None),
        FactorMode::Parallel => {
            let pool = build_pool(config.workers, "factor-worker")?;
            let size = pool.current_num_threads();
            (factorize_parallel(&config.numbers, &pool), Some(size))
        }
    };
    self_check(&config.numbers, &results, &config.expected)?;
    info!("Self-check passed. All factors are correct.");
    let elapsed = start.elapsed();

    match workers {
        Some(n) => info!(
            "{mode} execution time: {:.4} seconds on {n} workers",
            elapsed.as_secs_f64()
        ),
        None => info!("{mode} execution time: {:.4} seconds", elapsed.as_secs_f64()),
    }

    Ok(FactorRun {
        mode,
        workers,
        results,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> FactorConfig {
        FactorConfig {
            numbers: vec![12, 7],
            expected: vec![vec![1, 2, 3, 4, 6, 12], vec![1, 7]],
            modes: vec!["linear".into()],
            workers: 2,
        }
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("linear".parse::<FactorMode>().unwrap(), FactorMode::Linear);
        assert_eq!("parallel".parse::<FactorMode>().unwrap(), FactorMode::Parallel);
        assert!(matches!(
            "Linear".parse::<FactorMode>(),
            Err(DeclutterError::InvalidMode(m)) if m == "Linear"
        ));
    }

    #[test]
    fn invalid_mode_is_rejected_without_running() {
        let err = run_factorization("turbo", &small_config()).unwrap_err();
        assert!(matches!(err, DeclutterError::InvalidMode(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn linear_run_passes_self_check() {
        let run = run_factorization("linear", &small_config()).unwrap();
        assert_eq!(run.mode, FactorMode::Linear);
        assert_eq!(run.workers, None);
        assert_eq!(run.results, small_config().expected);
    }

    #[test]
    fn parallel_run_reports_pool_size() {
        let run = run_factorization("parallel", &small_config()).unwrap();
        assert_eq!(run.workers, Some(2));
        assert_eq!(run.results, small_config().expected);
    }

    #[test]
    fn mismatch_names_the_failing_number() {
        let mut cfg = small_config();
        cfg.expected[1] = vec![1, 2, 7];
        let err = run_factorization("linear", &cfg).unwrap_err();
        assert!(matches!(err, DeclutterError::SelfCheck { number: 7 }), "got {err:?}");
        assert!(err.is_fatal());
    }

    #[test]
    fn missing_expected_entry_is_a_mismatch() {
        let err = self_check(&[4], &[vec![1, 2, 4]], &[]).unwrap_err();
        assert!(matches!(err, DeclutterError::SelfCheck { number: 4 }));
    }
}
