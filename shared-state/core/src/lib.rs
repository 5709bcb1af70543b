// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod error;
pub use error::SettingsError;

pub mod counter_store;
pub use counter_store::CounterStore;

mod locked_map;
pub use locked_map::LockedMap;

mod concurrent_map;
pub use concurrent_map::ConcurrentMap;

pub mod key_generator;
pub use key_generator::KeyGenerator;

pub mod role;
pub use role::Role;

mod settings;
pub use settings::{RoleSettings, Settings};

mod phase;
pub use phase::{run_phase, PhaseReport};

mod schedule;
pub use schedule::{Consistency, Schedule};

mod variant;
pub use variant::{Variant, VariantReport};
