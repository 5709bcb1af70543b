// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use dispatch_core::Random;

pub const KEY_ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

pub const DEFAULT_KEY_LENGTH: usize = 3;

/// Draws fixed-length lowercase keys uniformly. Short keys keep the key space
/// small, so roles keep colliding on the same keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyGenerator {
    length: usize,
}

impl KeyGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Number of distinct keys, saturating at `usize::MAX`.
    pub fn key_space(&self) -> usize {
        u32::try_from(self.length)
            .ok()
            .and_then(|length| KEY_ALPHABET.len().checked_pow(length))
            .unwrap_or(usize::MAX)
    }

    pub fn generate<R: Random + ?Sized>(&self, random: &R) -> String {
        (0..self.length)
            .map(|_| char::from(KEY_ALPHABET[random.usize(0..KEY_ALPHABET.len())]))
            .collect()
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_LENGTH)
    }
}
