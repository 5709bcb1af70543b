// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ResultTally, WorkFunction, Workload};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Strategy for running every job of a workload through a work function.
///
/// Implementations differ only in how work is spread across tasks and how
/// results are aggregated. Every implementation processes each job exactly
/// once, so the returned tally always totals `workload.len()`.
pub trait DispatchStrategy: Send + Sync {
    /// Short name used in reports.
    fn label(&self) -> &'static str;

    /// Number of long-lived workers, `None` when concurrency is not bounded by a pool.
    fn worker_count(&self) -> Option<NonZeroUsize> {
        None
    }

    /// Processes the whole workload and returns the aggregated outcome.
    fn dispatch<W>(
        &self,
        workload: &Workload,
        work: Arc<W>,
    ) -> impl std::future::Future<Output = ResultTally> + Send
    where
        W: WorkFunction + 'static;
}
