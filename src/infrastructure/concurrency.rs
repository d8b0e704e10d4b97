//! Concurrency management for pathctx.
//! Configures the rayon pool that files and functions are spread over.

use anyhow::Result;
use tracing::info;

/// Worker count used when none is requested: half the cores, at least one.
pub fn default_workers() -> usize {
    std::cmp::max(1, num_cpus::get() / 2)
}

/// Initialize the global rayon thread pool with `workers` threads
/// (or [`default_workers`] when `None`). Returns the worker count in use.
pub fn init_thread_pool(workers: Option<usize>) -> Result<usize> {
    let workers = workers.filter(|&n| n > 0).unwrap_or_else(default_workers);

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    info!(workers, cores = num_cpus::get(), "initialized thread pool");
    Ok(workers)
}
