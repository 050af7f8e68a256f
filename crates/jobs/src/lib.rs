//! Background jobs for the ASIM DNS receiver.
//!
//! Every job is bound to a `CancellationToken` owned by the receiver and
//! returns its `JoinHandle`, so shutdown can cancel and join rather than
//! abandon a free-running timer.
pub mod cache_sweep;
pub mod runner;
pub mod stats_report;

pub use cache_sweep::CacheSweepJob;
pub use runner::JobRunner;
pub use stats_report::StatsReportJob;
