// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people running the tool.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::PhotoliftError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user must change the input or the request.
    ActionRequired,
    /// Retrying the same request will not help.
    Permanent,
    /// Something in the environment went wrong; trying again may work.
    Transient,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `PhotoliftError` into a `HumanError`.
pub fn humanize_error(err: &PhotoliftError) -> HumanError {
    match err {
        // -- Input errors --
        PhotoliftError::Decode(_) => HumanError {
            message: "This image couldn't be read.".into(),
            suggestion: "The file may be damaged or not an image. Try re-saving it as a JPEG or PNG.".into(),
            severity: Severity::Permanent,
        },

        PhotoliftError::UnsupportedMode(detail) => HumanError {
            message: "This image format isn't supported.".into(),
            suggestion: format!("Convert the image to JPEG, PNG, GIF or BMP first. ({detail})"),
            severity: Severity::Permanent,
        },

        PhotoliftError::EmptyInput(what) => HumanError {
            message: format!("No images were given for the {what}."),
            suggestion: "Choose at least one image and try again.".into(),
            severity: Severity::ActionRequired,
        },

        PhotoliftError::InvalidArgument(detail) => HumanError {
            message: "One of the options isn't valid.".into(),
            suggestion: format!("Check the command options. ({detail})"),
            severity: Severity::ActionRequired,
        },

        PhotoliftError::InvalidScale(scale) => HumanError {
            message: format!("A scale factor of {scale} can't be used."),
            suggestion: "Use a positive scale such as 2 or 5, small enough that the result fits in memory.".into(),
            severity: Severity::ActionRequired,
        },

        // -- Pipeline errors --
        PhotoliftError::Stage { stage, .. } => HumanError {
            message: format!("Processing stopped during the {stage} step."),
            suggestion: "Try a smaller image or a different profile. If this keeps happening, please report it.".into(),
            severity: Severity::Permanent,
        },

        PhotoliftError::LearnedStage(_) => HumanError {
            message: "The learned enhancement model didn't work on this image.".into(),
            suggestion: "The classical result can still be used. Check the model installation if you need the learned pass.".into(),
            severity: Severity::Transient,
        },

        // -- Output errors --
        PhotoliftError::Encode(_) => HumanError {
            message: "The result couldn't be saved in that format.".into(),
            suggestion: "Try saving as .jpg or .png instead.".into(),
            severity: Severity::ActionRequired,
        },

        // -- Storage --
        PhotoliftError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "Check the path and try again.".into(),
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "Permission denied reading or writing that file.".into(),
                    suggestion: "Check the file permissions, or write the output somewhere else.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, the disk may be full.".into(),
                    severity: Severity::Transient,
                }
            }
        }

        PhotoliftError::Serialization(_) => HumanError {
            message: "The configuration file couldn't be read.".into(),
            suggestion: "Fix the JSON syntax in the config file, or delete it to use defaults.".into(),
            severity: Severity::ActionRequired,
        },
    }
}
