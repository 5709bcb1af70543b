// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

/// Outcome of processing one job, typically an HTTP status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultCode(i32);

impl ResultCode {
    /// Sentinel recorded when the work function could not produce a result.
    pub const FAILED: ResultCode = ResultCode(-1);

    pub const OK: ResultCode = ResultCode(200);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn is_failure(self) -> bool {
        self.0 == Self::FAILED.0
    }
}

impl From<i32> for ResultCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<u16> for ResultCode {
    fn from(code: u16) -> Self {
        Self(i32::from(code))
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
