// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ResultCode, WorkFunction};
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::debug;

/// Longest status line read before giving up on the response.
const MAX_STATUS_LINE: u64 = 1024;

/// Issues a plain HTTP/1.1 `GET` for the payload URL and answers with the
/// response status code. Only the status line is read. Redirects are not
/// followed, a 3xx answer is recorded as is.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpStatusWork;

impl HttpStatusWork {
    pub fn new() -> Self {
        Self
    }

    async fn fetch_status(&self, url: &str) -> io::Result<ResultCode> {
        let target = Target::parse(url).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("unsupported url '{}'", url))
        })?;

        let mut stream = TcpStream::connect((target.host, target.port)).await?;
        let request = format!(
            "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            target.path, target.authority
        );
        stream.write_all(request.as_bytes()).await?;

        let mut reader = BufReader::new(stream).take(MAX_STATUS_LINE);
        let mut status_line = String::new();
        reader.read_line(&mut status_line).await?;

        parse_status_line(&status_line).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("malformed status line {:?}", status_line.trim_end()),
            )
        })
    }
}

#[async_trait]
impl WorkFunction for HttpStatusWork {
    async fn process(&self, payload: &str) -> ResultCode {
        match self.fetch_status(payload).await {
            Ok(code) => code,
            Err(e) => {
                debug!(url = payload, error = %e, "request failed");
                ResultCode::FAILED
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Target<'a> {
    authority: &'a str,
    host: &'a str,
    port: u16,
    path: &'a str,
}

impl<'a> Target<'a> {
    fn parse(url: &'a str) -> Option<Self> {
        let rest = url.strip_prefix("http://")?;
        let (authority, path) = match rest.find('/') {
            Some(idx) => rest.split_at(idx),
            None => (rest, "/"),
        };
        if authority.is_empty() {
            return None;
        }

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => (host, port.parse().ok()?),
            None => (authority, 80),
        };

        Some(Self {
            authority,
            host,
            port,
            path,
        })
    }
}

fn parse_status_line(line: &str) -> Option<ResultCode> {
    let mut parts = line.split_whitespace();
    if !parts.next()?.starts_with("HTTP/") {
        return None;
    }
    let code: u16 = parts.next()?.parse().ok()?;
    (100..1000).contains(&code).then(|| ResultCode::from(code))
}
