// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    ChannelTallyPool, DispatchStrategy, LockedTallyPool, ResultTally, SequentialLoop, TaskPerJob,
    WorkFunction, Workload,
};
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Any of the dispatch strategies, so a run matrix can hold them side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    TaskPerJob,
    LockedTallyPool(NonZeroUsize),
    ChannelTallyPool(NonZeroUsize),
}

impl DispatchStrategy for Strategy {
    fn label(&self) -> &'static str {
        match self {
            Strategy::Sequential => SequentialLoop.label(),
            Strategy::TaskPerJob => TaskPerJob.label(),
            Strategy::LockedTallyPool(workers) => LockedTallyPool::new(*workers).label(),
            Strategy::ChannelTallyPool(workers) => ChannelTallyPool::new(*workers).label(),
        }
    }

    fn worker_count(&self) -> Option<NonZeroUsize> {
        match self {
            Strategy::Sequential | Strategy::TaskPerJob => None,
            Strategy::LockedTallyPool(workers) | Strategy::ChannelTallyPool(workers) => {
                Some(*workers)
            }
        }
    }

    async fn dispatch<W>(&self, workload: &Workload, work: Arc<W>) -> ResultTally
    where
        W: WorkFunction + 'static,
    {
        match *self {
            Strategy::Sequential => SequentialLoop.dispatch(workload, work).await,
            Strategy::TaskPerJob => TaskPerJob.dispatch(workload, work).await,
            Strategy::LockedTallyPool(workers) => {
                LockedTallyPool::new(workers).dispatch(workload, work).await
            }
            Strategy::ChannelTallyPool(workers) => {
                ChannelTallyPool::new(workers).dispatch(workload, work).await
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.worker_count() {
            Some(workers) => write!(f, "{} [{}]", self.label(), workers),
            None => f.write_str(self.label()),
        }
    }
}
