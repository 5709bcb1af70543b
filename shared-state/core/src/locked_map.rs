// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::CounterStore;
use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Plain map behind one read-write lock. Reads share the lock, every mutation
/// takes it exclusively.
#[derive(Debug, Default)]
pub struct LockedMap {
    map: RwLock<HashMap<String, i64>>,
}

impl LockedMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, i64>> {
        self.map.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, i64>> {
        self.map.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CounterStore for LockedMap {
    fn label(&self) -> &'static str {
        "locked-map"
    }

    fn increment(&self, key: &str) -> i64 {
        let mut map = self.write();
        let counter = map.entry(key.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    fn load(&self, key: &str) -> Option<i64> {
        self.read().get(key).copied()
    }

    fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    fn store(&self, key: &str, value: i64) {
        self.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<i64> {
        self.write().remove(key)
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn snapshot(&self) -> BTreeMap<String, i64> {
        self.read()
            .iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect()
    }
}
