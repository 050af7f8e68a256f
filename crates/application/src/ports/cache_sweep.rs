/// Result of one deduplication-cache sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Periodic maintenance hook for the deduplication cache. Implemented by
/// the filter manager and driven by the background sweep job.
pub trait CacheSweepPort: Send + Sync {
    fn run_sweep(&self) -> SweepOutcome;
}
