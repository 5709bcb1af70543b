// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchStrategy, Reporter, RunReport, Strategy, WorkFunction, Workload};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Worker counts compared by default.
pub const DEFAULT_WORKER_COUNTS: [usize; 7] = [1, 2, 4, 8, 16, 32, 256];

/// Ordered list of strategies run back to back over the same workload.
pub struct RunMatrix {
    strategies: Vec<Strategy>,
    cancellation_token: CancellationToken,
}

impl RunMatrix {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self {
            strategies,
            cancellation_token: CancellationToken::new(),
        }
    }

    /// Task-per-job, then the locked pool and the channel pool for each worker count.
    pub fn standard(worker_counts: &[NonZeroUsize]) -> Self {
        let strategies = std::iter::once(Strategy::TaskPerJob)
            .chain(worker_counts.iter().map(|&n| Strategy::LockedTallyPool(n)))
            .chain(worker_counts.iter().map(|&n| Strategy::ChannelTallyPool(n)))
            .collect();
        Self::new(strategies)
    }

    /// Prepends the sequential baseline.
    pub fn with_sequential(mut self) -> Self {
        if self.strategies.first() != Some(&Strategy::Sequential) {
            self.strategies.insert(0, Strategy::Sequential);
        }
        self
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Returns a clone of the cancellation token for external control
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Runs every strategy in order, handing each report to `reporter` as soon
    /// as it is available. A cancelled matrix stops before the next run; a run
    /// already in progress always completes.
    pub async fn run<W, R>(
        &self,
        workload: &Workload,
        work: Arc<W>,
        reporter: &mut R,
    ) -> Vec<RunReport>
    where
        W: WorkFunction + 'static,
        R: Reporter + ?Sized,
    {
        let mut reports = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            if self.cancellation_token.is_cancelled() {
                info!(remaining = self.strategies.len() - reports.len(), "run matrix cancelled");
                break;
            }
            let report = measure(strategy, workload, work.clone()).await;
            debug!(strategy = %strategy, tally = %report.tally, "run finished");
            reporter.report(&report);
            reports.push(report);
        }
        reports
    }
}

/// Times a single dispatch of `workload`.
pub async fn measure<S, W>(strategy: &S, workload: &Workload, work: Arc<W>) -> RunReport
where
    S: DispatchStrategy,
    W: WorkFunction + 'static,
{
    let start = Instant::now();
    let tally = strategy.dispatch(workload, work).await;
    RunReport {
        label: strategy.label(),
        workers: strategy.worker_count(),
        elapsed: start.elapsed(),
        tally,
    }
}
