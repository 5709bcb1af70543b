// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ResultCode, WorkFunction};
use async_trait::async_trait;

/// Stub that answers every payload with the same code and no latency.
#[derive(Clone, Copy, Debug)]
pub struct ConstantWork {
    code: ResultCode,
}

impl ConstantWork {
    pub fn new(code: ResultCode) -> Self {
        Self { code }
    }

    pub fn ok() -> Self {
        Self::new(ResultCode::OK)
    }
}

impl Default for ConstantWork {
    fn default() -> Self {
        Self::ok()
    }
}

#[async_trait]
impl WorkFunction for ConstantWork {
    async fn process(&self, _payload: &str) -> ResultCode {
        self.code
    }
}
