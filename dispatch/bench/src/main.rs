// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dispatch_core::{
    generate_files, parse_counts, read_workload, workload_file::DEFAULT_BASE_URL, ConstantWork,
    DeadlineWork, FastrandRandom, HttpStatusWork, RunMatrix, StdoutReporter, WorkFunction,
    Workload, DEFAULT_WORKER_COUNTS,
};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// Constant 200 answer, measures dispatch overhead only
    Stub,
    /// Real HTTP GET against each url
    Http,
    /// Stub first, then real requests
    All,
}

#[derive(Debug, Parser)]
#[command(
    name = "dispatch-bench",
    about = "Compare task-per-job and worker pool dispatch over a workload file"
)]
struct Cli {
    /// Generate workload files with fake urls before benchmarking
    #[arg(short = 'g', long)]
    generate: bool,

    /// Directory for generated files, used only with -g
    #[arg(short = 'p', long, default_value = "/tmp/")]
    path: PathBuf,

    /// Base url for generated urls, used only with -g
    #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of urls per generated file, separated by comma
    #[arg(short = 'c', long, default_value = "10,100,1000,10000")]
    counts: String,

    /// Workload file to benchmark, one url per line
    #[arg(short = 'f', long, default_value = "/tmp/urls_10000.txt")]
    file: PathBuf,

    /// Worker counts for the pool strategies, separated by comma
    #[arg(short = 'w', long, value_delimiter = ',')]
    workers: Vec<NonZeroUsize>,

    /// Also run the sequential baseline
    #[arg(long)]
    sequential: bool,

    /// Which work function to benchmark with
    #[arg(short = 't', long, value_enum, default_value_t = Transport::All)]
    transport: Transport,

    /// Abandon a job after this many milliseconds and count it as failed
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Print the result tally next to each timing
    #[arg(long)]
    show_tally: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_banner(file: &Path, workload: &Workload) {
    let processors = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    println!("### INFO");
    println!("Processors:\t\t{}", processors);
    println!("File:\t\t\t{}", file.display());
    println!("Lines in file:\t\t{}", workload.len());
    println!("###");
}

async fn run_with<W: WorkFunction + 'static>(
    matrix: &RunMatrix,
    workload: &Workload,
    work: W,
    deadline: Option<Duration>,
    reporter: &mut StdoutReporter,
) {
    match deadline {
        Some(deadline) => {
            let work = Arc::new(DeadlineWork::new(work, deadline));
            matrix.run(workload, work, reporter).await;
        }
        None => {
            matrix.run(workload, Arc::new(work), reporter).await;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.generate {
        let counts = parse_counts(&cli.counts)?;
        let files = generate_files(&cli.path, &cli.base_url, &counts, &FastrandRandom)
            .await
            .context("failed to generate workload files")?;
        info!(?files, "files generated");
    }

    let workload = read_workload(&cli.file)
        .await
        .with_context(|| format!("failed to load workload from {}", cli.file.display()))?;
    if workload.is_empty() {
        warn!(file = %cli.file.display(), "workload is empty");
    }

    print_banner(&cli.file, &workload);

    let worker_counts: Vec<NonZeroUsize> = if cli.workers.is_empty() {
        DEFAULT_WORKER_COUNTS
            .iter()
            .filter_map(|&n| NonZeroUsize::new(n))
            .collect()
    } else {
        cli.workers.clone()
    };

    let mut matrix = RunMatrix::standard(&worker_counts);
    if cli.sequential {
        matrix = matrix.with_sequential();
    }

    let cancel_token = matrix.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl+C received, stopping after the current run");
            cancel_token.cancel();
        }
    });

    let deadline = cli.deadline_ms.map(Duration::from_millis);
    let mut reporter = StdoutReporter {
        show_tally: cli.show_tally,
    };

    if matches!(cli.transport, Transport::Stub | Transport::All) {
        println!("stubs");
        run_with(&matrix, &workload, ConstantWork::ok(), deadline, &mut reporter).await;
    }

    if matches!(cli.transport, Transport::Http | Transport::All) {
        println!("\nreal requests");
        run_with(&matrix, &workload, HttpStatusWork::new(), deadline, &mut reporter).await;
    }

    Ok(())
}
