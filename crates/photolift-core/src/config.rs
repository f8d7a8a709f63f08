// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{PosterLayout, ProfileId};

/// Persistent settings for the surrounding layer (CLI or service).
///
/// The engine itself is stateless; these values only choose defaults for
/// calls that do not specify them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Profile used when a request does not name one.
    pub default_profile: ProfileId,
    /// JPEG quality for encoded output (1-100).
    pub jpeg_quality: u8,
    /// Layout used for posters when none is given.
    pub poster_layout: PosterLayout,
    /// Worker threads for batch processing. `None` uses one per core.
    pub batch_threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_profile: ProfileId::Traditional,
            jpeg_quality: 95,
            poster_layout: PosterLayout::Grid,
            batch_threads: None,
        }
    }
}

impl EngineConfig {
    /// Load settings from a JSON file. A missing file yields the defaults;
    /// a malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&data)?;
        config.jpeg_quality = config.jpeg_quality.clamp(1, 100);
        Ok(config)
    }

    /// Write settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
