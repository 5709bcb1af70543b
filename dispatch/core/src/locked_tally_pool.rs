// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchStrategy, Job, ResultTally, SharedTally, WorkFunction, WorkerPool, Workload};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Bounded pool whose workers record results straight into a locked tally.
#[derive(Clone, Copy, Debug)]
pub struct LockedTallyPool {
    workers: NonZeroUsize,
}

impl LockedTallyPool {
    pub fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }
}

impl DispatchStrategy for LockedTallyPool {
    fn label(&self) -> &'static str {
        "locked-tally-pool"
    }

    fn worker_count(&self) -> Option<NonZeroUsize> {
        Some(self.workers)
    }

    async fn dispatch<W>(&self, workload: &Workload, work: Arc<W>) -> ResultTally
    where
        W: WorkFunction + 'static,
    {
        let tally = SharedTally::new();

        let worker_tally = tally.clone();
        WorkerPool::run(self.workers, workload.iter().cloned(), move |job: Job| {
            let work = work.clone();
            let tally = worker_tally.clone();
            async move {
                let code = work.process(job.payload()).await;
                tally.record(code);
            }
        })
        .await;

        tally.into_tally()
    }
}
