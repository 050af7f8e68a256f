#![allow(dead_code)]

use asim_dns_application::ports::{CacheSweepPort, FilterStatsPort, SweepOutcome};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

pub struct MockSweepPort {
    call_count: AtomicU64,
    entries_removed: AtomicUsize,
}

impl MockSweepPort {
    pub fn new() -> Self {
        Self {
            call_count: AtomicU64::new(0),
            entries_removed: AtomicUsize::new(0),
        }
    }

    pub fn with_entries_removed(self, removed: usize) -> Self {
        self.entries_removed.store(removed, Ordering::Relaxed);
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl CacheSweepPort for MockSweepPort {
    fn run_sweep(&self) -> SweepOutcome {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        SweepOutcome {
            entries_removed: self.entries_removed.load(Ordering::Relaxed),
            cache_size: 0,
        }
    }
}

pub struct MockStatsPort {
    total: AtomicU64,
    filtered: AtomicU64,
    read_count: AtomicU64,
}

impl MockStatsPort {
    pub fn new(total: u64, filtered: u64) -> Self {
        Self {
            total: AtomicU64::new(total),
            filtered: AtomicU64::new(filtered),
            read_count: AtomicU64::new(0),
        }
    }

    pub fn read_count(&self) -> u64 {
        self.read_count.load(Ordering::Relaxed)
    }
}

impl FilterStatsPort for MockStatsPort {
    fn total_events(&self) -> u64 {
        self.read_count.fetch_add(1, Ordering::Relaxed);
        self.total.load(Ordering::Relaxed)
    }

    fn filtered_events(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    fn filter_percentage(&self) -> f64 {
        let total = self.total.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        self.filtered.load(Ordering::Relaxed) as f64 / total as f64 * 100.0
    }
}
