// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Role, SettingsError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

const DEFAULT_WORKERS: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(workers) => workers,
    None => unreachable!(),
};

/// Worker pool size and job count for one role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSettings {
    pub workers: NonZeroUsize,
    pub jobs: usize,
}

impl RoleSettings {
    pub fn new(workers: NonZeroUsize, jobs: usize) -> Self {
        Self { workers, jobs }
    }
}

/// Per-role settings of a shared-state run. Roles missing from a settings
/// file keep their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub creators: RoleSettings,
    pub readers: RoleSettings,
    pub updaters: RoleSettings,
    pub deleters: RoleSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            creators: RoleSettings::new(DEFAULT_WORKERS, 10_000_000),
            readers: RoleSettings::new(DEFAULT_WORKERS, 100_000_000),
            updaters: RoleSettings::new(DEFAULT_WORKERS, 10_000_000),
            deleters: RoleSettings::new(DEFAULT_WORKERS, 10_000_000),
        }
    }
}

impl Settings {
    /// Same workers and jobs for every role.
    pub fn uniform(workers: NonZeroUsize, jobs: usize) -> Self {
        let role = RoleSettings::new(workers, jobs);
        Self {
            creators: role,
            readers: role,
            updaters: role,
            deleters: role,
        }
    }

    pub fn for_role(&self, role: Role) -> RoleSettings {
        match role {
            Role::Create => self.creators,
            Role::Read => self.readers,
            Role::Update => self.updaters,
            Role::Delete => self.deleters,
        }
    }

    pub fn for_role_mut(&mut self, role: Role) -> &mut RoleSettings {
        match role {
            Role::Create => &mut self.creators,
            Role::Read => &mut self.readers,
            Role::Update => &mut self.updaters,
            Role::Delete => &mut self.deleters,
        }
    }

    /// Divides every job count, keeping worker counts.
    pub fn scaled_down(mut self, divisor: NonZeroUsize) -> Self {
        for role in Role::ALL {
            self.for_role_mut(role).jobs /= divisor.get();
        }
        self
    }

    pub fn total_jobs(&self) -> usize {
        Role::ALL
            .iter()
            .map(|&role| self.for_role(role).jobs)
            .sum()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
