// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::BTreeMap;

/// Keyed counter store shared by every worker of every role.
/// Implementations handle concurrency internally; each call is atomic on its own,
/// sequences of calls are not.
pub trait CounterStore: Send + Sync + 'static {
    /// Short name used in logs.
    fn label(&self) -> &'static str;

    /// Adds one to the counter, creating it at zero first. Returns the new value.
    fn increment(&self, key: &str) -> i64;

    fn load(&self, key: &str) -> Option<i64>;

    fn contains(&self, key: &str) -> bool {
        self.load(key).is_some()
    }

    /// Overwrites the counter, creating the key if it is missing.
    fn store(&self, key: &str, value: i64);

    fn remove(&self, key: &str) -> Option<i64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Point-in-time copy, ordered by key.
    fn snapshot(&self) -> BTreeMap<String, i64>;
}
