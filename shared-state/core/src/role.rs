// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The four kinds of access hammering a shared counter store.

use crate::{CounterStore, KeyGenerator};
use dispatch_core::Random;
use std::fmt;

/// Values written by updaters are drawn from this range.
pub const UPDATE_VALUE_RANGE: std::ops::Range<i64> = 0..100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Create,
    Read,
    Update,
    Delete,
}

impl Role {
    /// Order in which sequential schedules run the roles.
    pub const ALL: [Role; 4] = [Role::Create, Role::Read, Role::Update, Role::Delete];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Create => "creators",
            Role::Read => "readers",
            Role::Update => "updaters",
            Role::Delete => "deleters",
        }
    }

    /// Runs one job of this role against a freshly drawn key.
    pub fn perform<S, R>(self, store: &S, keys: &KeyGenerator, random: &R)
    where
        S: CounterStore + ?Sized,
        R: Random + ?Sized,
    {
        let key = keys.generate(random);
        // Only the access is measured, outcomes are discarded.
        match self {
            Role::Create => { create(store, &key); }
            Role::Read => { read(store, &key); }
            Role::Update => { update(store, &key, random); }
            Role::Delete => { delete(store, &key); }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn create<S: CounterStore + ?Sized>(store: &S, key: &str) -> i64 {
    store.increment(key)
}

pub fn read<S: CounterStore + ?Sized>(store: &S, key: &str) -> Option<i64> {
    store.load(key)
}

/// First half of an update: is the key there right now?
pub fn update_check<S: CounterStore + ?Sized>(store: &S, key: &str) -> bool {
    store.contains(key)
}

/// Second half of an update. Writes unconditionally, so a key deleted since the
/// check is silently recreated.
pub fn update_apply<S: CounterStore + ?Sized>(store: &S, key: &str, value: i64) {
    store.store(key, value);
}

/// Check-then-write with no lock held in between. Returns whether a write happened.
pub fn update<S, R>(store: &S, key: &str, random: &R) -> bool
where
    S: CounterStore + ?Sized,
    R: Random + ?Sized,
{
    if !update_check(store, key) {
        return false;
    }
    update_apply(store, key, random.i64(UPDATE_VALUE_RANGE));
    true
}

pub fn delete<S: CounterStore + ?Sized>(store: &S, key: &str) -> Option<i64> {
    store.remove(key)
}
