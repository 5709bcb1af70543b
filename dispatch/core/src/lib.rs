// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod error;
pub use error::WorkloadError;

mod job;
pub use job::{Job, Workload};

mod result_code;
pub use result_code::ResultCode;

mod result_tally;
pub use result_tally::{ResultTally, SharedTally};

pub mod random;
pub use random::Random;

pub mod fastrand_random;
pub use fastrand_random::{FastrandRandom, SeededRandom};

mod work_function;
pub use work_function::{FnWork, WorkFunction};

mod constant_work;
pub use constant_work::ConstantWork;

mod http_status_work;
pub use http_status_work::HttpStatusWork;

mod deadline_work;
pub use deadline_work::DeadlineWork;

pub mod workload_file;
pub use workload_file::{fake_urls, generate_files, parse_counts, read_workload, write_workload};

mod worker_pool;
pub use worker_pool::WorkerPool;

mod dispatch_strategy;
pub use dispatch_strategy::DispatchStrategy;

mod sequential_loop;
pub use sequential_loop::SequentialLoop;

mod task_per_job;
pub use task_per_job::TaskPerJob;

mod locked_tally_pool;
pub use locked_tally_pool::LockedTallyPool;

mod channel_tally_pool;
pub use channel_tally_pool::ChannelTallyPool;

mod strategy;
pub use strategy::Strategy;

mod reporter;
pub use reporter::{Reporter, RunReport, StdoutReporter};

mod run_matrix;
pub use run_matrix::{measure, RunMatrix, DEFAULT_WORKER_COUNTS};
