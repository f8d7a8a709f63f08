// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing catalog of selectable profiles and filters.

use serde::Serialize;

use crate::types::{FilterId, ProfileId, Speed};

/// Display metadata for a selectable enhancement profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub id: ProfileId,
    pub name: &'static str,
    pub description: &'static str,
    pub speed: Speed,
}

/// Display metadata for a filter preset.
#[derive(Debug, Clone, Serialize)]
pub struct FilterInfo {
    pub id: FilterId,
    pub name: &'static str,
    pub description: &'static str,
}

/// Profiles offered to end users, in presentation order.
///
/// `quality_basic` is omitted: it is callable by id but not advertised.
pub fn profiles() -> Vec<ProfileInfo> {
    vec![
        ProfileInfo {
            id: ProfileId::Traditional,
            name: "Traditional",
            description: "Gentle 2x upscale with light sharpening; keeps a natural look.",
            speed: Speed::Fast,
        },
        ProfileInfo {
            id: ProfileId::SuperClear,
            name: "Super Clear",
            description: "5x upscale with multi-pass sharpening and strong contrast and saturation.",
            speed: Speed::Slow,
        },
        ProfileInfo {
            id: ProfileId::Advanced,
            name: "Advanced",
            description: "2x upscale with moderate tonal boosts and a final edge-enhance pass.",
            speed: Speed::Medium,
        },
        ProfileInfo {
            id: ProfileId::SuperQuality,
            name: "Super Quality",
            description: "High-quality 2x upscale with restrained enhancement parameters.",
            speed: Speed::Slow,
        },
    ]
}

/// All filter presets, in presentation order.
pub fn filters() -> Vec<FilterInfo> {
    FilterId::ALL
        .into_iter()
        .map(|id| {
            let (name, description) = match id {
                FilterId::BlackWhite => ("Black & White", "Classic monochrome."),
                FilterId::Vintage => ("Vintage", "Muted colour, punchy contrast, slightly dark."),
                FilterId::Film => ("Film", "Lightly faded film look."),
                FilterId::Fresh => ("Fresh", "Brighter and more colourful."),
                FilterId::Hdr => ("HDR", "High contrast, vivid colour."),
                FilterId::Warm => ("Warm", "Richer, warmer colour."),
                FilterId::Cool => ("Cool", "Subdued, cooler colour."),
            };
            FilterInfo {
                id,
                name,
                description,
            }
        })
        .collect()
}
