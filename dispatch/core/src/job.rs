// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;
use std::sync::Arc;

/// Opaque job payload, a URL or a key. Cloning is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Job(Arc<str>);

impl Job {
    pub fn new(payload: impl Into<Arc<str>>) -> Self {
        Self(payload.into())
    }

    pub fn payload(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Job {
    fn from(payload: &str) -> Self {
        Self::new(payload)
    }
}

impl From<String> for Job {
    fn from(payload: String) -> Self {
        Self::new(payload)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, immutable sequence of jobs. Every run of a benchmark shares the same
/// workload, so the job list sits behind an `Arc`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workload {
    jobs: Arc<[Job]>,
}

impl Workload {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs: jobs.into() }
    }

    /// Builds a workload of `count` copies of the same payload.
    pub fn repeated(payload: &str, count: usize) -> Self {
        let job = Job::from(payload);
        std::iter::repeat(job).take(count).collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }
}

impl FromIterator<Job> for Workload {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: Into<Arc<str>>> From<Vec<S>> for Workload {
    fn from(payloads: Vec<S>) -> Self {
        payloads.into_iter().map(Job::new).collect()
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
