// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchStrategy, ResultTally, WorkFunction, Workload};
use std::sync::Arc;

/// Baseline: processes jobs one after another on the calling task.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialLoop;

impl DispatchStrategy for SequentialLoop {
    fn label(&self) -> &'static str {
        "sequential"
    }

    async fn dispatch<W>(&self, workload: &Workload, work: Arc<W>) -> ResultTally
    where
        W: WorkFunction + 'static,
    {
        let mut tally = ResultTally::new();
        for job in workload {
            tally.record(work.process(job.payload()).await);
        }
        tally
    }
}
