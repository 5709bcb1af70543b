// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ResultTally;
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Outcome of one timed dispatch run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub label: &'static str,
    pub workers: Option<NonZeroUsize>,
    pub elapsed: Duration,
    pub tally: ResultTally,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.workers {
            Some(workers) => write!(f, "{} [{}]:\t\t{:?}", self.label, workers, self.elapsed),
            None => write!(f, "{}:\t\t{:?}", self.label, self.elapsed),
        }
    }
}

/// Sink for finished runs.
pub trait Reporter {
    fn report(&mut self, report: &RunReport);
}

/// Prints one line per run on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutReporter {
    pub show_tally: bool,
}

impl Reporter for StdoutReporter {
    fn report(&mut self, report: &RunReport) {
        if self.show_tally {
            println!("{}\t{}", report, report.tally);
        } else {
            println!("{}", report);
        }
    }
}

impl Reporter for Vec<RunReport> {
    fn report(&mut self, report: &RunReport) {
        self.push(report.clone());
    }
}
