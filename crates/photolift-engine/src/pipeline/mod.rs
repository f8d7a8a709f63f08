// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline module: enhancement profiles, the learned blend stage, the filter
// bank, and manual adjustments.

pub mod adjust;
pub mod filter;
pub mod learned;
pub mod profile;

pub use adjust::{apply_adjustments, try_apply_adjustments};
pub use filter::{apply_filter, try_apply_filter};
pub use learned::{LEARNED_WEIGHT, SecondaryEnhancer, blend, run_advanced_ai};
pub use profile::{enhance_bytes, run_profile, run_profile_by_id, run_stages};
