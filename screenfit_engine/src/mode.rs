// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Fitting policy mapping a fixed design rectangle onto a viewport.
///
/// Exactly one mode is active at a time. This enum is consumed by
/// [`crate::compute`] and stored by higher-level controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScaleMode {
    /// Do not adapt: identity scale, design-sized content, no offset.
    ///
    /// Serves as an escape hatch when the caller wants the design rendered
    /// at its native size regardless of the viewport.
    None,
    /// Uniform fit: scale by the smaller per-axis ratio and center the
    /// result (letterbox/pillarbox).
    #[default]
    Auto,
    /// Fit to the viewport width, scrolling vertically when the scaled
    /// height exceeds the viewport height.
    Width,
    /// Fit to the viewport height, scrolling horizontally when the scaled
    /// width exceeds the viewport width.
    Height,
    /// Fill both axes independently with a non-uniform scale; content is
    /// distorted to cover the viewport exactly.
    Stretch,
}

impl ScaleMode {
    /// Returns the canonical string form of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Auto => "auto",
            Self::Width => "width",
            Self::Height => "height",
            Self::Stretch => "stretch",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no known [`ScaleMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownModeError;

impl fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized scale mode (expected one of: none, auto, width, height, stretch)")
    }
}

impl core::error::Error for UnknownModeError {}

impl FromStr for ScaleMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "auto" => Ok(Self::Auto),
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "stretch" => Ok(Self::Stretch),
            _ => Err(UnknownModeError),
        }
    }
}
