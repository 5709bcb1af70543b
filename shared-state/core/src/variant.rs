// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    ConcurrentMap, Consistency, CounterStore, KeyGenerator, LockedMap, PhaseReport, Schedule,
    Settings, SettingsError,
};
use dispatch_core::Random;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// A store paired with a schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    LockedSequential,
    LockedParallel,
    ConcurrentParallel,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::LockedSequential,
        Variant::LockedParallel,
        Variant::ConcurrentParallel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::LockedSequential => "locked-sequential",
            Variant::LockedParallel => "locked-parallel",
            Variant::ConcurrentParallel => "concurrent-parallel",
        }
    }

    pub fn schedule(&self) -> Schedule {
        match self {
            Variant::LockedSequential => Schedule::Sequential,
            Variant::LockedParallel | Variant::ConcurrentParallel => Schedule::Parallel,
        }
    }

    pub fn consistency(&self) -> Consistency {
        self.schedule().consistency()
    }

    /// Runs the variant against a fresh, empty store of its own kind.
    pub async fn run<R>(self, settings: &Settings, keys: KeyGenerator, random: Arc<R>) -> VariantReport
    where
        R: Random + 'static,
    {
        match self {
            Variant::LockedSequential | Variant::LockedParallel => {
                self.run_on(Arc::new(LockedMap::new()), settings, keys, random)
                    .await
            }
            Variant::ConcurrentParallel => {
                self.run_on(Arc::new(ConcurrentMap::new()), settings, keys, random)
                    .await
            }
        }
    }

    /// Runs the variant's schedule against the given store.
    pub async fn run_on<S, R>(
        self,
        store: Arc<S>,
        settings: &Settings,
        keys: KeyGenerator,
        random: Arc<R>,
    ) -> VariantReport
    where
        S: CounterStore,
        R: Random + 'static,
    {
        info!(variant = %self, store = store.label(), jobs = settings.total_jobs(), "variant started");
        let start = Instant::now();
        let phases = self
            .schedule()
            .run(settings, store.clone(), keys, random)
            .await;
        let elapsed = start.elapsed();
        let final_len = store.len();
        info!(variant = %self, ?elapsed, final_len, "variant finished");

        VariantReport {
            variant: self,
            phases,
            final_len,
            elapsed,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.label() == s.trim())
            .ok_or_else(|| SettingsError::UnknownVariant(s.to_string()))
    }
}

/// Per-role timings of one variant plus the number of keys left in its store.
#[derive(Clone, Debug)]
pub struct VariantReport {
    pub variant: Variant,
    pub phases: Vec<PhaseReport>,
    pub final_len: usize,
    pub elapsed: Duration,
}

impl fmt::Display for VariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phase in &self.phases {
            writeln!(f, "{} - {}: {:?}", phase.role, self.variant, phase.elapsed)?;
        }
        write!(f, "keys left - {}: {}", self.variant, self.final_len)
    }
}
