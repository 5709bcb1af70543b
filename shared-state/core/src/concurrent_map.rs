// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::CounterStore;
use dashmap::DashMap;
use std::collections::BTreeMap;

/// Sharded concurrent map. Callers never hold a lock across calls; each
/// operation locks only the shard owning the key.
#[derive(Debug, Default)]
pub struct ConcurrentMap {
    map: DashMap<String, i64>,
}

impl ConcurrentMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for ConcurrentMap {
    fn label(&self) -> &'static str {
        "concurrent-map"
    }

    fn increment(&self, key: &str) -> i64 {
        let mut counter = self.map.entry(key.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    fn load(&self, key: &str) -> Option<i64> {
        self.map.get(key).map(|counter| *counter)
    }

    fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn store(&self, key: &str, value: i64) {
        self.map.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<i64> {
        self.map.remove(key).map(|(_, value)| value)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn snapshot(&self) -> BTreeMap<String, i64> {
        self.map
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
