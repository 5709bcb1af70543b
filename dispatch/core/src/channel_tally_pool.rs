// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    DispatchStrategy, Job, ResultCode, ResultTally, WorkFunction, WorkerPool, Workload,
};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

/// Bounded pool whose workers emit results on a channel sized for the whole
/// workload. Only the caller touches the tally, so workers never contend on it.
#[derive(Clone, Copy, Debug)]
pub struct ChannelTallyPool {
    workers: NonZeroUsize,
}

impl ChannelTallyPool {
    pub fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }
}

impl DispatchStrategy for ChannelTallyPool {
    fn label(&self) -> &'static str {
        "channel-tally-pool"
    }

    fn worker_count(&self) -> Option<NonZeroUsize> {
        Some(self.workers)
    }

    async fn dispatch<W>(&self, workload: &Workload, work: Arc<W>) -> ResultTally
    where
        W: WorkFunction + 'static,
    {
        let expected = workload.len();
        // tokio channels need a non-zero capacity
        let (results_tx, mut results_rx) = mpsc::channel::<ResultCode>(expected.max(1));

        let mut pool = WorkerPool::start(self.workers, move |job: Job| {
            let work = work.clone();
            let results = results_tx.clone();
            async move {
                let code = work.process(job.payload()).await;
                // Capacity covers every job, this never waits.
                let _ = results.send(code).await;
            }
        });

        // Enqueueing
        for job in workload.iter().cloned() {
            if !pool.submit(job).await {
                warn!("job queue closed before all jobs were submitted");
                break;
            }
        }

        // Closing
        pool.close();

        // Draining
        let mut tally = ResultTally::new();
        for _ in 0..expected {
            match results_rx.recv().await {
                Some(code) => tally.record(code),
                // Every worker is gone, nothing more will arrive.
                None => break,
            }
        }

        pool.join().await;
        tally
    }
}
