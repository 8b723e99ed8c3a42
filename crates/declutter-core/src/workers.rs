/// Bounded rayon pools shared by the sorter and the factorization engine.
use crate::config::resolve_workers;
use crate::error::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Build a pool of `workers` threads (`0` = one per core) named `{prefix}-{i}`.
pub fn build_pool(workers: usize, prefix: &'static str) -> Result<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(resolve_workers(workers))
        .thread_name(move |i| format!("{prefix}-{i}"))
        .build()?;
    Ok(pool)
}

/// Name of the calling thread, for task-assignment log lines.
pub fn current_worker_name() -> String {
    std::thread::current()
        .name()
        .unwrap_or("unnamed")
        .to_string()
}
