use asim_dns_jobs::CacheSweepJob;
use std::sync::Arc;
use tokio::time::{sleep, timeout, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockSweepPort;

#[tokio::test]
async fn sweep_job_starts_without_panic() {
    let mock = Arc::new(MockSweepPort::new());
    let job = Arc::new(CacheSweepJob::new(mock));

    let handle = job.spawn();
    sleep(Duration::from_millis(10)).await;
    handle.abort();
}

#[tokio::test]
async fn sweep_fires_on_interval() {
    let mock = Arc::new(MockSweepPort::new());
    let job = Arc::new(CacheSweepJob::new(mock.clone()).with_interval(1));

    let handle = job.spawn();
    sleep(Duration::from_millis(1100)).await;

    assert!(
        mock.call_count() >= 1,
        "Sweep should have fired at least once"
    );
    handle.abort();
}

#[tokio::test]
async fn sweep_job_stops_on_cancellation() {
    let mock = Arc::new(MockSweepPort::new());
    let token = CancellationToken::new();
    let job = Arc::new(
        CacheSweepJob::new(mock.clone())
            .with_interval(1)
            .with_cancellation(token.clone()),
    );

    let handle = job.spawn();
    sleep(Duration::from_millis(1100)).await;
    assert!(mock.call_count() >= 1, "Should have fired at least once");

    token.cancel();

    // The task must terminate, not just stop ticking.
    timeout(Duration::from_secs(1), handle)
        .await
        .expect("sweep job should exit after cancellation")
        .expect("sweep job should not panic");

    let count_after = mock.call_count();
    sleep(Duration::from_millis(1100)).await;
    assert_eq!(
        mock.call_count(),
        count_after,
        "Should not fire after cancellation"
    );
}

#[tokio::test]
async fn sweep_job_keeps_running_across_cycles() {
    let mock = Arc::new(MockSweepPort::new().with_entries_removed(3));
    let job = Arc::new(CacheSweepJob::new(mock.clone()).with_interval(1));

    let handle = job.spawn();
    sleep(Duration::from_millis(2200)).await;

    assert!(
        mock.call_count() >= 2,
        "Sweep should keep firing every interval"
    );
    handle.abort();
}
