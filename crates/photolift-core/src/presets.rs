// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static definition tables for enhancement profiles and filter presets.
//
// These tables are the only state shared between calls. They are immutable
// and safe to read concurrently without synchronisation.

use crate::types::{FilterId, ProfileId};

/// One atomic transform in a profile's stage list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Lanczos upscale by the profile's (possibly overridden) scale factor.
    Resample,
    /// 3x3 high-pass, centre 9, neighbours -1.
    Sharpen,
    EdgeEnhance,
    EdgeEnhanceMore,
    /// 3x3 median. Not used by the built-in profiles.
    Denoise,
    Contrast(f32),
    Saturation(f32),
    Brightness(f32),
}

impl Stage {
    /// Short stage name used in logs and error values.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resample => "resample",
            Self::Sharpen => "sharpen",
            Self::EdgeEnhance => "edge_enhance",
            Self::EdgeEnhanceMore => "edge_enhance_more",
            Self::Denoise => "denoise",
            Self::Contrast(_) => "contrast",
            Self::Saturation(_) => "saturation",
            Self::Brightness(_) => "brightness",
        }
    }
}

/// An immutable, ordered pipeline definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileDescriptor {
    pub id: ProfileId,
    pub default_scale: u32,
    pub stages: &'static [Stage],
}

const TRADITIONAL: &[Stage] = &[
    Stage::Resample,
    Stage::Sharpen,
    Stage::Contrast(1.05),
    Stage::Brightness(1.01),
];

const QUALITY_BASIC: &[Stage] = &[
    Stage::Resample,
    Stage::Sharpen,
    Stage::Contrast(1.08),
    Stage::Saturation(1.03),
    Stage::Brightness(1.01),
];

const ADVANCED: &[Stage] = &[
    Stage::Resample,
    Stage::Sharpen,
    Stage::Contrast(1.10),
    Stage::Saturation(1.05),
    Stage::Brightness(1.02),
    Stage::EdgeEnhance,
];

const SUPER_CLEAR: &[Stage] = &[
    Stage::Resample,
    Stage::Sharpen,
    Stage::EdgeEnhance,
    Stage::EdgeEnhanceMore,
    Stage::Contrast(1.25),
    Stage::Saturation(1.20),
    Stage::Brightness(1.05),
    Stage::Sharpen,
    Stage::EdgeEnhanceMore,
    Stage::Sharpen,
];

const SUPER_QUALITY: &[Stage] = &[
    Stage::Resample,
    Stage::Sharpen,
    Stage::Contrast(1.10),
    Stage::Saturation(1.05),
    Stage::Brightness(1.02),
    Stage::EdgeEnhance,
];

/// Every built-in profile, in [`ProfileId::ALL`] order.
pub static PROFILES: [ProfileDescriptor; 5] = [
    ProfileDescriptor {
        id: ProfileId::Traditional,
        default_scale: 2,
        stages: TRADITIONAL,
    },
    ProfileDescriptor {
        id: ProfileId::QualityBasic,
        default_scale: 2,
        stages: QUALITY_BASIC,
    },
    ProfileDescriptor {
        id: ProfileId::Advanced,
        default_scale: 2,
        stages: ADVANCED,
    },
    ProfileDescriptor {
        id: ProfileId::SuperClear,
        default_scale: 5,
        stages: SUPER_CLEAR,
    },
    ProfileDescriptor {
        id: ProfileId::SuperQuality,
        default_scale: 2,
        stages: SUPER_QUALITY,
    },
];

impl ProfileId {
    /// The static pipeline definition for this profile.
    pub fn descriptor(&self) -> &'static ProfileDescriptor {
        match self {
            Self::Traditional => &PROFILES[0],
            Self::QualityBasic => &PROFILES[1],
            Self::Advanced => &PROFILES[2],
            Self::SuperClear => &PROFILES[3],
            Self::SuperQuality => &PROFILES[4],
        }
    }
}

/// One tonal step inside a filter preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneStep {
    /// Collapse to luma, then re-expand to three equal channels.
    Grayscale,
    Saturation(f32),
    Contrast(f32),
    Brightness(f32),
}

/// An immutable filter preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDescriptor {
    pub id: FilterId,
    pub steps: &'static [ToneStep],
}

/// Every filter preset, in [`FilterId::ALL`] order.
pub static FILTERS: [FilterDescriptor; 7] = [
    FilterDescriptor {
        id: FilterId::BlackWhite,
        steps: &[ToneStep::Grayscale],
    },
    FilterDescriptor {
        id: FilterId::Vintage,
        steps: &[
            ToneStep::Saturation(0.7),
            ToneStep::Contrast(1.3),
            ToneStep::Brightness(0.9),
        ],
    },
    // Film stops after contrast; it has no brightness step.
    FilterDescriptor {
        id: FilterId::Film,
        steps: &[ToneStep::Saturation(0.8), ToneStep::Contrast(1.2)],
    },
    FilterDescriptor {
        id: FilterId::Fresh,
        steps: &[ToneStep::Saturation(1.3), ToneStep::Brightness(1.1)],
    },
    FilterDescriptor {
        id: FilterId::Hdr,
        steps: &[ToneStep::Contrast(1.5), ToneStep::Saturation(1.2)],
    },
    FilterDescriptor {
        id: FilterId::Warm,
        steps: &[ToneStep::Saturation(1.4)],
    },
    FilterDescriptor {
        id: FilterId::Cool,
        steps: &[ToneStep::Saturation(0.6)],
    },
];

impl FilterId {
    pub fn descriptor(&self) -> &'static FilterDescriptor {
        match self {
            Self::BlackWhite => &FILTERS[0],
            Self::Vintage => &FILTERS[1],
            Self::Film => &FILTERS[2],
            Self::Fresh => &FILTERS[3],
            Self::Hdr => &FILTERS[4],
            Self::Warm => &FILTERS[5],
            Self::Cool => &FILTERS[6],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_match_their_ids() {
        for id in ProfileId::ALL {
            assert_eq!(id.descriptor().id, id);
        }
        for id in FilterId::ALL {
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn every_profile_starts_with_resample() {
        for profile in &PROFILES {
            assert_eq!(profile.stages.first(), Some(&Stage::Resample));
            let resamples = profile
                .stages
                .iter()
                .filter(|s| **s == Stage::Resample)
                .count();
            assert_eq!(resamples, 1, "{} resamples more than once", profile.id);
        }
    }

    #[test]
    fn super_clear_is_five_x_with_three_sharpen_passes() {
        let desc = ProfileId::SuperClear.descriptor();
        assert_eq!(desc.default_scale, 5);
        let sharpen = desc.stages.iter().filter(|s| **s == Stage::Sharpen).count();
        let more = desc
            .stages
            .iter()
            .filter(|s| **s == Stage::EdgeEnhanceMore)
            .count();
        assert_eq!(sharpen, 3);
        assert_eq!(more, 2);
        assert_eq!(desc.stages.last(), Some(&Stage::Sharpen));
    }

    #[test]
    fn traditional_has_no_saturation_step() {
        let desc = ProfileId::Traditional.descriptor();
        assert_eq!(desc.default_scale, 2);
        assert!(!desc.stages.iter().any(|s| matches!(s, Stage::Saturation(_))));
    }

    #[test]
    fn advanced_and_super_quality_share_a_stage_list() {
        assert_eq!(
            ProfileId::Advanced.descriptor().stages,
            ProfileId::SuperQuality.descriptor().stages
        );
    }

    #[test]
    fn film_has_no_brightness_but_vintage_and_fresh_do() {
        let has_brightness = |id: FilterId| {
            id.descriptor()
                .steps
                .iter()
                .any(|s| matches!(s, ToneStep::Brightness(_)))
        };
        assert!(!has_brightness(FilterId::Film));
        assert!(has_brightness(FilterId::Vintage));
        assert!(has_brightness(FilterId::Fresh));
    }
}
