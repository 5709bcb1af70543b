// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ResultCode;
use async_trait::async_trait;
use std::sync::Arc;

/// Unit of work applied to every job payload.
///
/// Failures are reported in-band as [`ResultCode::FAILED`], never as an error,
/// so a dispatch strategy always runs to completion.
#[async_trait]
pub trait WorkFunction: Send + Sync {
    async fn process(&self, payload: &str) -> ResultCode;
}

#[async_trait]
impl<W: WorkFunction + ?Sized> WorkFunction for Arc<W> {
    async fn process(&self, payload: &str) -> ResultCode {
        (**self).process(payload).await
    }
}

/// Adapts a synchronous closure into a work function.
pub struct FnWork<F> {
    f: F,
}

impl<F> FnWork<F>
where
    F: Fn(&str) -> ResultCode + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> WorkFunction for FnWork<F>
where
    F: Fn(&str) -> ResultCode + Send + Sync,
{
    async fn process(&self, payload: &str) -> ResultCode {
        (self.f)(payload)
    }
}
