// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{run_phase, CounterStore, KeyGenerator, PhaseReport, Role, Settings};
use dispatch_core::Random;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::error;

/// What a schedule promises about the final store contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consistency {
    /// Every role sees the store exactly as the previous role left it.
    Linearizable,
    /// Roles interleave, so raced keys end up in any order-dependent state.
    Racy,
}

/// How the four role pools are laid out in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Create, read, update, delete, one after the other.
    Sequential,
    /// All four pools at once against the same store, each role fed by its own task.
    Parallel,
}

impl Schedule {
    pub fn consistency(&self) -> Consistency {
        match self {
            Schedule::Sequential => Consistency::Linearizable,
            Schedule::Parallel => Consistency::Racy,
        }
    }

    /// Runs every role and returns one report per role, in `Role::ALL` order.
    pub async fn run<S, R>(
        self,
        settings: &Settings,
        store: Arc<S>,
        keys: KeyGenerator,
        random: Arc<R>,
    ) -> Vec<PhaseReport>
    where
        S: CounterStore,
        R: Random + 'static,
    {
        let phase = |role: Role| {
            run_phase(
                role,
                settings.for_role(role),
                store.clone(),
                keys,
                random.clone(),
            )
        };

        match self {
            Schedule::Sequential => {
                let mut reports = Vec::with_capacity(Role::ALL.len());
                for role in Role::ALL {
                    reports.push(phase(role).await);
                }
                reports
            }
            Schedule::Parallel => {
                // One task per role, so no role waits on another to enqueue.
                let handles: Vec<(Role, JoinHandle<PhaseReport>)> = Role::ALL
                    .into_iter()
                    .map(|role| (role, tokio::spawn(phase(role))))
                    .collect();

                let mut reports = Vec::with_capacity(handles.len());
                for (role, handle) in handles {
                    match handle.await {
                        Ok(report) => reports.push(report),
                        Err(e) => error!(%role, error = %e, "phase task failed"),
                    }
                }
                reports
            }
        }
    }
}
