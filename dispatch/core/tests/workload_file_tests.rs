// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use dispatch_core::{
    fake_urls, generate_files, parse_counts, read_workload,
    workload_file::{workload_file_name, FAKE_STATUS_RANGE},
    write_workload, Job, SeededRandom, WorkloadError,
};

#[tokio::test]
async fn test_written_workload_reads_back_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys.txt");
    let payloads = ["abc", "abc", "", "http://localhost:8087/status/404"];

    write_workload(&path, payloads).await.unwrap();
    let workload = read_workload(&path).await.unwrap();

    assert_eq!(workload.len(), 4);
    let read: Vec<&str> = workload.iter().map(Job::payload).collect();
    assert_eq!(read, payloads);
}

#[tokio::test]
async fn test_missing_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    match read_workload(&path).await {
        Err(WorkloadError::Open { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected open error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_read_without_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("urls.txt");
    std::fs::write(&path, "a\nb\nc").unwrap();

    let workload = read_workload(&path).await.unwrap();
    assert_eq!(workload.len(), 3);
    assert_eq!(workload.iter().last().map(Job::payload), Some("c"));
}

#[test]
fn test_fake_urls_use_base_and_status_range() {
    let random = SeededRandom::new(3);
    let with_slash = fake_urls(50, "http://localhost:8087/status/", &random);
    let without_slash = fake_urls(50, "http://localhost:8087/status", &random);

    for url in with_slash.iter().chain(&without_slash) {
        let code = url
            .strip_prefix("http://localhost:8087/status/")
            .and_then(|code| code.parse::<u32>().ok())
            .unwrap_or_else(|| panic!("unexpected url {}", url));
        assert!(FAKE_STATUS_RANGE.contains(&code), "code {} out of range", code);
    }
}

#[tokio::test]
async fn test_generate_files_creates_one_file_per_count() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("fixtures");
    let random = SeededRandom::new(5);

    let files = generate_files(&target, "http://localhost:8087/status/", &[10, 100], &random)
        .await
        .unwrap();

    assert_eq!(
        files,
        vec![
            target.join(workload_file_name(10)),
            target.join(workload_file_name(100))
        ]
    );
    assert_eq!(read_workload(&files[0]).await.unwrap().len(), 10);
    assert_eq!(read_workload(&files[1]).await.unwrap().len(), 100);
}

#[test]
fn test_parse_counts() {
    assert_eq!(parse_counts("10,100,1000").unwrap(), vec![10, 100, 1000]);
    assert_eq!(parse_counts(" 10 , 1_000 ,").unwrap(), vec![10, 1000]);
    assert!(parse_counts("").unwrap().is_empty());

    match parse_counts("10,ten") {
        Err(WorkloadError::InvalidCount(raw)) => assert_eq!(raw, "ten"),
        other => panic!("expected invalid count, got {:?}", other),
    }
}
