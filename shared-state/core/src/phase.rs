// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CounterStore, KeyGenerator, Role, RoleSettings};
use dispatch_core::{Random, WorkerPool};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Timing of one role's pool over its whole job count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseReport {
    pub role: Role,
    pub settings: RoleSettings,
    pub elapsed: Duration,
}

/// Runs `settings.jobs` jobs of `role` through a pool of `settings.workers`
/// workers and waits until every worker exited.
pub async fn run_phase<S, R>(
    role: Role,
    settings: RoleSettings,
    store: Arc<S>,
    keys: KeyGenerator,
    random: Arc<R>,
) -> PhaseReport
where
    S: CounterStore,
    R: Random + 'static,
{
    debug!(%role, workers = settings.workers.get(), jobs = settings.jobs, "phase started");
    let start = Instant::now();

    WorkerPool::run(
        settings.workers,
        std::iter::repeat(()).take(settings.jobs),
        move |()| {
            let store = store.clone();
            let random = random.clone();
            async move {
                role.perform(&*store, &keys, &*random);
            }
        },
    )
    .await;

    let elapsed = start.elapsed();
    debug!(%role, ?elapsed, "phase finished");
    PhaseReport {
        role,
        settings,
        elapsed,
    }
}
