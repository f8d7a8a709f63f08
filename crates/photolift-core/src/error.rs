// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Photolift.

use thiserror::Error;

/// Top-level error type for all Photolift operations.
#[derive(Debug, Error)]
pub enum PhotoliftError {
    // -- Input errors --
    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("unsupported image format or color mode: {0}")]
    UnsupportedMode(String),

    #[error("no images supplied for {0}")]
    EmptyInput(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid scale factor {0}; must be finite and positive")]
    InvalidScale(f32),

    // -- Pipeline errors --
    #[error("stage `{stage}` failed: {reason}")]
    Stage { stage: &'static str, reason: String },

    #[error("learned enhancement failed: {0}")]
    LearnedStage(String),

    // -- Output errors --
    #[error("image encoding failed: {0}")]
    Encode(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PhotoliftError {
    /// Shorthand for an internal stage failure.
    pub fn stage(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::Stage {
            stage,
            reason: reason.into(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PhotoliftError>;
