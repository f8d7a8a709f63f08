// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photolift — Core types, static profile/filter tables, and error definitions
// shared across all crates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod human_errors;
pub mod presets;
pub mod types;

pub use config::EngineConfig;
pub use error::PhotoliftError;
pub use presets::{FilterDescriptor, ProfileDescriptor, Stage, ToneStep};
pub use types::*;
