// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchStrategy, ResultTally, SharedTally, WorkFunction, Workload};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::error;

/// Unbounded fan-out: one task per job, results recorded under a single lock.
///
/// Concurrency grows with the workload, and so does contention on the tally.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskPerJob;

impl DispatchStrategy for TaskPerJob {
    fn label(&self) -> &'static str {
        "task-per-job"
    }

    async fn dispatch<W>(&self, workload: &Workload, work: Arc<W>) -> ResultTally
    where
        W: WorkFunction + 'static,
    {
        let tally = SharedTally::new();

        let handles: Vec<JoinHandle<()>> = workload
            .iter()
            .cloned()
            .map(|job| {
                let work = work.clone();
                let tally = tally.clone();
                tokio::spawn(async move {
                    let code = work.process(job.payload()).await;
                    tally.record(code);
                })
            })
            .collect();

        // Completion barrier
        for (idx, handle) in handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                error!(job = idx, error = %e, "job task failed");
            }
        }

        tally.into_tally()
    }
}
