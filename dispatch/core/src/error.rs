// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to acquire or produce a workload. Always fatal for a benchmark run.
#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("failed to open workload file '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read workload file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write workload file '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create workload directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("invalid workload size '{0}'")]
    InvalidCount(String),
}
