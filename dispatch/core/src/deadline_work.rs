// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ResultCode, WorkFunction};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Bounds every call of the wrapped work function. A call that outlives the
/// deadline is abandoned and recorded as [`ResultCode::FAILED`].
pub struct DeadlineWork<W> {
    inner: W,
    deadline: Duration,
}

impl<W: WorkFunction> DeadlineWork<W> {
    pub fn new(inner: W, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[async_trait]
impl<W: WorkFunction> WorkFunction for DeadlineWork<W> {
    async fn process(&self, payload: &str) -> ResultCode {
        match tokio::time::timeout(self.deadline, self.inner.process(payload)).await {
            Ok(code) => code,
            Err(_) => {
                debug!(payload, deadline = ?self.deadline, "job exceeded deadline");
                ResultCode::FAILED
            }
        }
    }
}
