// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, trace, warn};

/// Fixed set of long-lived workers pulling jobs from one shared bounded queue.
///
/// The queue capacity equals the worker count, so [`WorkerPool::submit`] waits
/// whenever every worker is busy and the queue is full. Workers exit once the
/// queue is closed and drained.
pub struct WorkerPool<J> {
    jobs: Option<mpsc::Sender<J>>,
    workers: Vec<JoinHandle<()>>,
}

impl<J: Send + 'static> WorkerPool<J> {
    /// Spawns `worker_count` workers, each running `handler` on the jobs it receives.
    pub fn start<H, Fut>(worker_count: NonZeroUsize, handler: H) -> Self
    where
        H: Fn(J) -> Fut + Clone + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<J>(worker_count.get());
        let rx = Arc::new(Mutex::new(rx));

        let workers = (0..worker_count.get())
            .map(|worker_id| {
                let rx = rx.clone();
                let handler = handler.clone();
                tokio::spawn(async move {
                    let mut processed = 0usize;
                    loop {
                        let job = rx.lock().await.recv().await;
                        match job {
                            Some(job) => {
                                handler(job).await;
                                processed += 1;
                            }
                            None => break,
                        }
                    }
                    trace!(worker_id, processed, "worker exited");
                })
            })
            .collect();

        Self {
            jobs: Some(tx),
            workers,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Enqueues a job, waiting while the queue is full.
    /// Returns false when the queue is closed or every worker is gone.
    pub async fn submit(&self, job: J) -> bool {
        match &self.jobs {
            Some(tx) => tx.send(job).await.is_ok(),
            None => false,
        }
    }

    /// Closes the queue. Jobs already queued are still processed.
    pub fn close(&mut self) {
        self.jobs.take();
    }

    /// Closes the queue and waits until every worker has drained it and exited.
    pub async fn join(mut self) {
        self.close();
        for (worker_id, handle) in self.workers.into_iter().enumerate() {
            if let Err(e) = handle.await {
                error!(worker_id, error = %e, "worker task failed");
            }
        }
    }

    /// Runs every job through a fresh pool and returns once all workers exited.
    pub async fn run<I, H, Fut>(worker_count: NonZeroUsize, jobs: I, handler: H)
    where
        I: IntoIterator<Item = J>,
        H: Fn(J) -> Fut + Clone + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let pool = Self::start(worker_count, handler);
        for job in jobs {
            if !pool.submit(job).await {
                warn!("job queue closed before all jobs were submitted");
                break;
            }
        }
        pool.join().await;
    }
}
