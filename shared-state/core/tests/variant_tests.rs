// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use dispatch_core::FastrandRandom;
use shared_state_core::role;
use shared_state_core::{
    ConcurrentMap, Consistency, CounterStore, KeyGenerator, LockedMap, Role, RoleSettings,
    Schedule, Settings, SettingsError, Variant,
};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

/// Creators and readers only. Reads never change the store.
fn creators_and_readers(jobs: usize) -> Settings {
    let mut settings = Settings::uniform(workers(4), 0);
    settings.creators = RoleSettings::new(workers(8), jobs);
    settings.readers = RoleSettings::new(workers(4), jobs);
    settings
}

async fn check_creates_are_conserved<S: CounterStore>(store: S, schedule: Schedule) {
    let store = Arc::new(store);
    let reports = schedule
        .run(
            &creators_and_readers(5_000),
            store.clone(),
            KeyGenerator::default(),
            Arc::new(FastrandRandom),
        )
        .await;

    assert_eq!(reports.len(), 4);
    let snapshot = store.snapshot();
    assert_eq!(
        snapshot.values().sum::<i64>(),
        5_000,
        "{} with {:?}",
        store.label(),
        schedule
    );
    assert!(snapshot.values().all(|&count| count >= 1));
    assert!(snapshot.len() <= KeyGenerator::default().key_space());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_creates_are_conserved() {
    for schedule in [Schedule::Sequential, Schedule::Parallel] {
        check_creates_are_conserved(LockedMap::new(), schedule).await;
        check_creates_are_conserved(ConcurrentMap::new(), schedule).await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_every_variant_reports_each_role() {
    let settings = Settings::uniform(workers(4), 500);

    for variant in Variant::ALL {
        let report = variant
            .run(&settings, KeyGenerator::default(), Arc::new(FastrandRandom))
            .await;

        assert_eq!(report.variant, variant);
        let roles: Vec<Role> = report.phases.iter().map(|phase| phase.role).collect();
        assert_eq!(roles, Role::ALL);
        for phase in &report.phases {
            assert_eq!(phase.settings, settings.for_role(phase.role));
        }
        assert!(report.final_len <= 500);

        let text = report.to_string();
        assert!(text.starts_with(&format!("creators - {}: ", variant)), "{}", text);
        assert!(text.ends_with(&format!("keys left - {}: {}", variant, report.final_len)));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sequential_variant_sees_previous_roles() {
    // One key and one deleter: whatever creators wrote is gone at the end.
    let keys = KeyGenerator::new(1);
    let mut settings = Settings::uniform(workers(2), 0);
    settings.creators = RoleSettings::new(workers(4), 2_000);
    settings.deleters = RoleSettings::new(workers(1), 10_000);

    let store = Arc::new(LockedMap::new());
    let report = Variant::LockedSequential
        .run_on(store.clone(), &settings, keys, Arc::new(FastrandRandom))
        .await;

    assert_eq!(report.final_len, 0);
    assert!(store.is_empty());
}

/// Locked map that remembers what every load returned.
#[derive(Default)]
struct RecordingStore {
    inner: LockedMap,
    loads: Mutex<Vec<(String, Option<i64>)>>,
}

impl CounterStore for RecordingStore {
    fn label(&self) -> &'static str {
        "recording"
    }
    fn increment(&self, key: &str) -> i64 {
        self.inner.increment(key)
    }
    fn load(&self, key: &str) -> Option<i64> {
        let value = self.inner.load(key);
        self.loads.lock().unwrap().push((key.to_string(), value));
        value
    }
    fn store(&self, key: &str, value: i64) {
        self.inner.store(key, value)
    }
    fn remove(&self, key: &str) -> Option<i64> {
        self.inner.remove(key)
    }
    fn len(&self) -> usize {
        self.inner.len()
    }
    fn snapshot(&self) -> BTreeMap<String, i64> {
        self.inner.snapshot()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sequential_readers_see_every_created_value() {
    // Single-letter keys, so readers keep hitting created keys.
    let keys = KeyGenerator::new(1);
    let mut settings = Settings::uniform(workers(2), 0);
    settings.creators = RoleSettings::new(workers(8), 3_000);
    settings.readers = RoleSettings::new(workers(8), 3_000);

    let store = Arc::new(RecordingStore::default());
    Variant::LockedSequential
        .run_on(store.clone(), &settings, keys, Arc::new(FastrandRandom))
        .await;

    let created = store.snapshot();
    assert_eq!(created.values().sum::<i64>(), 3_000);
    for (key, value) in &created {
        assert_eq!(role::read(&*store, key), Some(*value), "key {}", key);
    }

    let loads = store.loads.lock().unwrap();
    assert!(loads.len() >= 3_000);
    for (key, observed) in loads.iter() {
        assert_eq!(*observed, created.get(key).copied(), "key {}", key);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_schedule_reports_in_role_order() {
    let settings = Settings {
        creators: RoleSettings::new(workers(1), 400),
        readers: RoleSettings::new(workers(2), 300),
        updaters: RoleSettings::new(workers(3), 200),
        deleters: RoleSettings::new(workers(4), 100),
    };

    let reports = Schedule::Parallel
        .run(
            &settings,
            Arc::new(ConcurrentMap::new()),
            KeyGenerator::default(),
            Arc::new(FastrandRandom),
        )
        .await;

    let roles: Vec<Role> = reports.iter().map(|report| report.role).collect();
    assert_eq!(roles, Role::ALL);
    for report in &reports {
        assert_eq!(report.settings, settings.for_role(report.role));
    }
}

#[test]
fn test_variant_properties() {
    assert_eq!(Variant::LockedSequential.schedule(), Schedule::Sequential);
    assert_eq!(
        Variant::LockedSequential.consistency(),
        Consistency::Linearizable
    );
    assert_eq!(Variant::LockedParallel.consistency(), Consistency::Racy);
    assert_eq!(Variant::ConcurrentParallel.consistency(), Consistency::Racy);
}

#[test]
fn test_variant_from_str() {
    for variant in Variant::ALL {
        assert_eq!(variant.label().parse::<Variant>().unwrap(), variant);
    }
    assert_eq!(
        " concurrent-parallel".parse::<Variant>().unwrap(),
        Variant::ConcurrentParallel
    );

    match "lock-free".parse::<Variant>() {
        Err(SettingsError::UnknownVariant(name)) => assert_eq!(name, "lock-free"),
        other => panic!("expected unknown variant, got {:?}", other),
    }
}
