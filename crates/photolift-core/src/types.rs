// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: profile and filter identifiers, poster layouts, and the
// manual adjustment set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PhotoliftError;

/// Identifier of a built-in enhancement profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileId {
    /// Gentle upscale with light sharpening. The fallback for unknown ids.
    #[default]
    Traditional,
    QualityBasic,
    Advanced,
    /// 5x upscale with multi-pass sharpening and strong tonal boosts.
    SuperClear,
    SuperQuality,
}

impl ProfileId {
    pub const ALL: [ProfileId; 5] = [
        Self::Traditional,
        Self::QualityBasic,
        Self::Advanced,
        Self::SuperClear,
        Self::SuperQuality,
    ];

    /// Wire identifier (`super_clear`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::QualityBasic => "quality_basic",
            Self::Advanced => "advanced",
            Self::SuperClear => "super_clear",
            Self::SuperQuality => "super_quality",
        }
    }

    /// Parse an identifier. Accepts `snake_case` and `kebab-case`, case-insensitive.
    pub fn from_id(id: &str) -> Option<Self> {
        let normalised = id.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|profile| profile.as_str() == normalised)
    }

    /// Parse an identifier, falling back to [`ProfileId::Traditional`] for
    /// anything unrecognised.
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a stylistic filter preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterId {
    BlackWhite,
    Vintage,
    Film,
    Fresh,
    Hdr,
    Warm,
    Cool,
}

impl FilterId {
    pub const ALL: [FilterId; 7] = [
        Self::BlackWhite,
        Self::Vintage,
        Self::Film,
        Self::Fresh,
        Self::Hdr,
        Self::Warm,
        Self::Cool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlackWhite => "blackwhite",
            Self::Vintage => "vintage",
            Self::Film => "film",
            Self::Fresh => "fresh",
            Self::Hdr => "hdr",
            Self::Warm => "warm",
            Self::Cool => "cool",
        }
    }

    /// Parse a filter identifier. Unknown ids yield `None`, which callers
    /// treat as the identity filter.
    pub fn from_id(id: &str) -> Option<Self> {
        let normalised = id.trim().to_ascii_lowercase();
        let normalised = match normalised.as_str() {
            "black_white" | "black-white" | "black-and-white" => "blackwhite",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == normalised)
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arrangement of cells on a poster canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterLayout {
    /// Up to three columns, as many rows as needed.
    #[default]
    Grid,
    /// A single row.
    Horizontal,
}

impl PosterLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Horizontal => "horizontal",
        }
    }
}

impl FromStr for PosterLayout {
    type Err = PhotoliftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(PhotoliftError::InvalidArgument(format!(
                "unknown poster layout `{other}` (expected grid or horizontal)"
            ))),
        }
    }
}

impl fmt::Display for PosterLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound on sharpen passes from the sharpness slider. Larger values
/// are clamped to this.
pub const MAX_SHARPEN_PASSES: u32 = 10;

/// User-supplied slider values. Every factor is centred on 1.0; absent
/// values are skipped when applied.
///
/// Application order is always brightness, contrast, saturation, sharpness,
/// no matter how the set was built.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub saturation: Option<f32>,
    pub sharpness: Option<f32>,
}

impl Adjustments {
    /// Build from `(name, factor)` pairs. Unrecognised names are ignored;
    /// a repeated name keeps its last value.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f32)>,
        K: AsRef<str>,
    {
        let mut adjustments = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "brightness" => adjustments.brightness = Some(value),
                "contrast" => adjustments.contrast = Some(value),
                "saturation" => adjustments.saturation = Some(value),
                "sharpness" => adjustments.sharpness = Some(value),
                _ => {}
            }
        }
        adjustments
    }

    pub fn is_empty(&self) -> bool {
        self.brightness.is_none()
            && self.contrast.is_none()
            && self.saturation.is_none()
            && self.sharpness.is_none()
    }

    /// Number of discrete sharpen passes requested: `floor(sharpness - 1)`
    /// for values above 1.0, otherwise zero. Never more than
    /// [`MAX_SHARPEN_PASSES`].
    pub fn sharpen_passes(&self) -> u32 {
        match self.sharpness {
            Some(s) if s.is_finite() && s > 1.0 => {
                ((s - 1.0).floor() as u32).min(MAX_SHARPEN_PASSES)
            }
            _ => 0,
        }
    }
}

/// Rough processing-time class shown alongside each profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fast,
    Medium,
    Slow,
}

impl Speed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Medium => "medium",
            Self::Slow => "slow",
        }
    }
}
