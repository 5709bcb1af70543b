// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use dispatch_core::WorkerPool;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_run_processes_every_job_once() {
    let seen = Arc::new(Mutex::new(Vec::new()));

    let handler_seen = seen.clone();
    WorkerPool::run(workers(5), 0..1_000usize, move |job| {
        let seen = handler_seen.clone();
        async move {
            seen.lock().unwrap().push(job);
        }
    })
    .await;

    let mut seen = seen.lock().unwrap().clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..1_000).collect::<Vec<_>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_without_jobs_returns() {
    let calls = Arc::new(AtomicUsize::new(0));

    let handler_calls = calls.clone();
    tokio::time::timeout(
        Duration::from_secs(5),
        WorkerPool::run(workers(8), std::iter::empty::<()>(), move |_| {
            let calls = handler_calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        }),
    )
    .await
    .expect("idle workers must exit once the queue is closed");

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_submit_after_close_is_rejected() {
    let mut pool = WorkerPool::start(workers(2), |_: u32| async {});
    assert_eq!(pool.worker_count(), 2);
    assert!(pool.submit(1).await);

    pool.close();
    assert!(!pool.submit(2).await);
    pool.join().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_submit_waits_while_queue_is_full() {
    let gate = Arc::new(Semaphore::new(0));
    let processed = Arc::new(AtomicUsize::new(0));

    let handler_gate = gate.clone();
    let handler_processed = processed.clone();
    let pool = WorkerPool::start(workers(1), move |_: u32| {
        let gate = handler_gate.clone();
        let processed = handler_processed.clone();
        async move {
            gate.acquire().await.unwrap().forget();
            processed.fetch_add(1, Ordering::SeqCst);
        }
    });

    // One job held by the single worker, one filling the queue of capacity one.
    assert!(pool.submit(1).await);
    assert!(pool.submit(2).await);

    let blocked = tokio::time::timeout(Duration::from_millis(100), pool.submit(3)).await;
    assert!(blocked.is_err(), "third submit must wait for queue space");

    gate.add_permits(2);
    pool.join().await;
    assert_eq!(processed.load(Ordering::SeqCst), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_panicking_job_does_not_stop_other_workers() {
    let processed = Arc::new(AtomicUsize::new(0));

    let handler_processed = processed.clone();
    WorkerPool::run(workers(2), 0..10u32, move |job| {
        let processed = handler_processed.clone();
        async move {
            if job == 0 {
                panic!("job 0 fails");
            }
            processed.fetch_add(1, Ordering::SeqCst);
        }
    })
    .await;

    assert_eq!(processed.load(Ordering::SeqCst), 9);
}
