/// Read side of the aggregate filtering counters, consumed by the
/// periodic stats-report job. Counters are process-lifetime scoped.
pub trait FilterStatsPort: Send + Sync {
    fn total_events(&self) -> u64;
    fn filtered_events(&self) -> u64;
    fn filter_percentage(&self) -> f64;
}
