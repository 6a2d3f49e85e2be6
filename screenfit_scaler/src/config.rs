// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scaler construction parameters.

use alloc::string::String;

use screenfit_engine::ScaleMode;

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::error::ConfigError;

/// A reference to the container element the scaler manages.
///
/// Either an already-resolved environment handle or a selector-like
/// identifier the [`Host`](crate::Host) resolves to exactly one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerRef<H> {
    /// An element handle supplied directly by the caller.
    Handle(H),
    /// A selector the host resolves (for example `"#dashboard"`).
    Selector(String),
}

impl<H> From<H> for ContainerRef<H> {
    fn from(handle: H) -> Self {
        Self::Handle(handle)
    }
}

impl<H> ContainerRef<H> {
    /// Builds a selector reference from any string-like value.
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }
}

/// Construction parameters for a [`Scaler`](crate::Scaler).
///
/// `H` is the host's element handle type. Defaults: mode [`ScaleMode::Auto`],
/// auto-resize enabled, a 100ms quiescence window for debounced recomputes.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalerConfig<H> {
    /// The container to scale.
    pub container: ContainerRef<H>,
    /// Design width in pixels; must be positive.
    pub design_width: f64,
    /// Design height in pixels; must be positive.
    pub design_height: f64,
    /// The initial fitting policy.
    pub mode: ScaleMode,
    /// Whether to subscribe to the viewport-change signal at construction.
    pub auto_resize: bool,
    /// Quiescence window for coalescing resize signals, in milliseconds.
    pub debounce_ms: u64,
}

impl<H> ScalerConfig<H> {
    /// Creates a config with the given container and design size, leaving
    /// the remaining fields at their defaults.
    pub fn new(container: impl Into<ContainerRef<H>>, design_width: f64, design_height: f64) -> Self {
        Self {
            container: container.into(),
            design_width,
            design_height,
            mode: ScaleMode::default(),
            auto_resize: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Sets the initial fitting policy.
    #[must_use]
    pub fn with_mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables the viewport-change subscription at construction.
    #[must_use]
    pub fn with_auto_resize(mut self, enabled: bool) -> Self {
        self.auto_resize = enabled;
        self
    }

    /// Sets the debounce quiescence window in milliseconds.
    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Validates the design dimensions.
    ///
    /// Container resolution is the host's job and is checked separately
    /// during construction.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.design_width.is_finite() || self.design_width <= 0.0 {
            return Err(ConfigError::InvalidDesignWidth(self.design_width));
        }
        if !self.design_height.is_finite() || self.design_height <= 0.0 {
            return Err(ConfigError::InvalidDesignHeight(self.design_height));
        }
        Ok(())
    }
}
