// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ResultCode;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Occurrence count per result code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTally {
    counts: HashMap<ResultCode, usize>,
}

impl ResultTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: ResultCode) {
        *self.counts.entry(code).or_insert(0) += 1;
    }

    pub fn count(&self, code: ResultCode) -> usize {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    /// Sum of all counts, equal to the number of jobs processed.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn failures(&self) -> usize {
        self.count(ResultCode::FAILED)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResultCode, usize)> + '_ {
        self.counts.iter().map(|(code, count)| (*code, *count))
    }

    /// Entries ordered by result code.
    pub fn sorted(&self) -> Vec<(ResultCode, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable();
        entries
    }
}

impl Extend<ResultCode> for ResultTally {
    fn extend<I: IntoIterator<Item = ResultCode>>(&mut self, iter: I) {
        for code in iter {
            self.record(code);
        }
    }
}

impl FromIterator<ResultCode> for ResultTally {
    fn from_iter<I: IntoIterator<Item = ResultCode>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

impl fmt::Display for ResultTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (code, count)) in self.sorted().into_iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", code, count)?;
        }
        f.write_str("}")
    }
}

/// Tally shared by concurrent workers behind one exclusive lock.
#[derive(Clone, Debug, Default)]
pub struct SharedTally {
    inner: Arc<Mutex<ResultTally>>,
}

impl SharedTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, code: ResultCode) {
        self.lock().record(code);
    }

    pub fn snapshot(&self) -> ResultTally {
        self.lock().clone()
    }

    /// Consumes the handle, avoiding a copy when no other handle is alive.
    pub fn into_tally(self) -> ResultTally {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ResultTally> {
        // A worker that panicked mid-record leaves a consistent map behind.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_total() {
        let mut tally = ResultTally::new();
        tally.record(ResultCode::OK);
        tally.record(ResultCode::OK);
        tally.record(ResultCode::FAILED);

        assert_eq!(tally.count(ResultCode::OK), 2);
        assert_eq!(tally.failures(), 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.distinct(), 2);
    }

    #[test]
    fn test_display_is_sorted_by_code() {
        let tally: ResultTally = [404, 200, -1, 200]
            .into_iter()
            .map(ResultCode::new)
            .collect();

        assert_eq!(tally.to_string(), "{-1: 1, 200: 2, 404: 1}");
    }

    #[test]
    fn test_shared_tally_into_tally_with_outstanding_clone() {
        let shared = SharedTally::new();
        let other = shared.clone();
        other.record(ResultCode::new(500));

        let tally = shared.into_tally();
        assert_eq!(tally.count(ResultCode::new(500)), 1);
        assert_eq!(other.snapshot(), tally);
    }
}
