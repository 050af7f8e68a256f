use asim_dns_jobs::StatsReportJob;
use std::sync::Arc;
use tokio::time::{sleep, timeout, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockStatsPort;

#[tokio::test]
async fn stats_job_reads_counters_on_interval() {
    let mock = Arc::new(MockStatsPort::new(100, 40));
    let job = Arc::new(StatsReportJob::new(mock.clone()).with_interval(1));

    let handle = job.spawn();
    sleep(Duration::from_millis(1100)).await;

    assert!(
        mock.read_count() >= 1,
        "Stats should have been read at least once"
    );
    handle.abort();
}

#[tokio::test]
async fn stats_job_survives_filtered_exceeding_total() {
    // Counter reads are two separate loads; a report taken between them
    // can see filtered > total and must not panic the task.
    let mock = Arc::new(MockStatsPort::new(5, 7));
    let token = CancellationToken::new();
    let job = Arc::new(
        StatsReportJob::new(mock.clone())
            .with_interval(1)
            .with_cancellation(token.clone()),
    );

    let handle = job.spawn();
    sleep(Duration::from_millis(100)).await;
    assert!(mock.read_count() >= 1, "Stats should have been read");

    token.cancel();
    timeout(Duration::from_secs(1), handle)
        .await
        .expect("stats job should exit after cancellation")
        .expect("stats job should not panic on inconsistent counters");
}

#[tokio::test]
async fn stats_job_stops_on_cancellation() {
    let mock = Arc::new(MockStatsPort::new(10, 5));
    let token = CancellationToken::new();
    let job = Arc::new(
        StatsReportJob::new(mock.clone())
            .with_interval(1)
            .with_cancellation(token.clone()),
    );

    let handle = job.spawn();
    sleep(Duration::from_millis(100)).await;
    token.cancel();

    timeout(Duration::from_secs(1), handle)
        .await
        .expect("stats job should exit after cancellation")
        .expect("stats job should not panic");
}
