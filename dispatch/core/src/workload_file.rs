// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Newline-delimited workload files: one payload per line, no header, no escaping.

use crate::{Job, Random, Workload, WorkloadError};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::{
    fs::{self, File},
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter},
};
use tracing::{debug, info};

/// Status codes embedded in generated urls are drawn uniformly from this range.
pub const FAKE_STATUS_RANGE: std::ops::Range<u32> = 200..700;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8087/status/";

/// Reads every line of `path` until end of stream.
pub async fn read_workload(path: impl AsRef<Path>) -> Result<Workload, WorkloadError> {
    let path = path.as_ref();
    let start = Instant::now();

    let file = File::open(path).await.map_err(|source| WorkloadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = BufReader::new(file).lines();
    let mut jobs = Vec::new();
    while let Some(line) = lines.next_line().await.map_err(|source| WorkloadError::Read {
        path: path.to_path_buf(),
        source,
    })? {
        jobs.push(Job::from(line));
    }

    info!(path = %path.display(), jobs = jobs.len(), elapsed = ?start.elapsed(), "workload read");
    Ok(Workload::new(jobs))
}

/// Writes one payload per line, replacing any existing file.
pub async fn write_workload<I, S>(path: impl AsRef<Path>, payloads: I) -> Result<(), WorkloadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let start = Instant::now();
    let write_error = |source| WorkloadError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).await.map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    let mut written = 0usize;
    for payload in payloads {
        writer
            .write_all(payload.as_ref().as_bytes())
            .await
            .map_err(write_error)?;
        writer.write_all(b"\n").await.map_err(write_error)?;
        written += 1;
    }
    writer.flush().await.map_err(write_error)?;

    debug!(path = %path.display(), lines = written, elapsed = ?start.elapsed(), "workload written");
    Ok(())
}

/// Generates `count` urls of the form `<base_url>/<status>`.
pub fn fake_urls<R: Random + ?Sized>(count: usize, base_url: &str, random: &R) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    (0..count)
        .map(|_| format!("{}/{}", base, random.u32(FAKE_STATUS_RANGE)))
        .collect()
}

pub fn workload_file_name(count: usize) -> String {
    format!("urls_{}.txt", count)
}

/// Writes one `urls_<count>.txt` file per requested count into `dir`.
pub async fn generate_files<R: Random + ?Sized>(
    dir: impl AsRef<Path>,
    base_url: &str,
    counts: &[usize],
    random: &R,
) -> Result<Vec<PathBuf>, WorkloadError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .await
        .map_err(|source| WorkloadError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut files = Vec::with_capacity(counts.len());
    for &count in counts {
        let path = dir.join(workload_file_name(count));
        write_workload(&path, fake_urls(count, base_url, random)).await?;
        info!(path = %path.display(), count, "workload file generated");
        files.push(path);
    }
    Ok(files)
}

/// Parses a comma separated list of workload sizes such as `10,100,1000`.
pub fn parse_counts(raw: &str) -> Result<Vec<usize>, WorkloadError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.replace('_', "")
                .parse()
                .map_err(|_| WorkloadError::InvalidCount(part.to_string()))
        })
        .collect()
}
