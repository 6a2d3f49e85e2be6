// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scaler controller: configuration, lifecycle, and the recompute
//! trigger around the pure engine.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Size;

use screenfit_engine::{ScaleFit, ScaleMode, compute};

use crate::config::ScalerConfig;
use crate::debounce::Debouncer;
use crate::error::{ConfigError, ScalerError};
use crate::host::{Host, Overflow, Placement};

/// Lifecycle state of a [`Scaler`].
///
/// Once destroyed, every mutating operation fails and there is no
/// transition back; a new scaler must be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalerState {
    /// Constructed and managing its container.
    Active,
    /// Torn down via [`Scaler::destroy`].
    Destroyed,
}

/// Observer invoked synchronously with each completed recompute.
type ScaleObserver = Box<dyn FnMut(&ScaleFit)>;

/// Controller that keeps a fixed-design container fitted to its viewport.
///
/// A `Scaler` exclusively owns one container handle and the wrapper it
/// inserts around it at construction. Every recompute measures the wrapper
/// through the [`Host`], runs the engine, applies the resulting transform
/// through the host's styling interface, and then notifies the registered
/// observer.
///
/// All operations run synchronously on the calling thread. The only
/// asynchrony is the resize trigger: [`notify_resize`](Self::notify_resize)
/// schedules a debounced recompute that [`tick`](Self::tick) runs once the
/// quiescence window has elapsed.
pub struct Scaler<H: Host> {
    host: H,
    container: H::Handle,
    wrapper: H::Handle,
    design: Size,
    mode: ScaleMode,
    auto_resize: bool,
    debounce: Debouncer,
    on_scale_change: Option<ScaleObserver>,
    last_fit: Option<ScaleFit>,
    state: ScalerState,
}

impl<H: Host> Scaler<H> {
    /// Constructs a scaler and applies the first computed transform.
    ///
    /// Validation (positive design dimensions, container resolution) runs
    /// before any structural mutation, so a failed construction leaves the
    /// host untouched. On success the container has been wrapped, sized to
    /// the design box, fitted once, and — when `auto_resize` is enabled —
    /// the host has been subscribed to the viewport-change signal.
    pub fn new(mut host: H, config: ScalerConfig<H::Handle>) -> Result<Self, ConfigError> {
        config.validate()?;
        let container = host
            .resolve(&config.container)
            .ok_or(ConfigError::ContainerNotFound)?;

        let wrapper = host.insert_wrapper(container);
        let mut scaler = Self {
            host,
            container,
            wrapper,
            design: Size::new(config.design_width, config.design_height),
            mode: config.mode,
            auto_resize: config.auto_resize,
            debounce: Debouncer::new(config.debounce_ms),
            on_scale_change: None,
            last_fit: None,
            state: ScalerState::Active,
        };

        scaler.host.set_design_box(container, scaler.design);
        if scaler.auto_resize {
            scaler.host.listen_resize(true);
        }
        scaler.apply_scale();
        Ok(scaler)
    }

    /// Forces an immediate recompute from the current viewport size.
    ///
    /// Applies the resulting transform through the host, notifies the
    /// observer, and returns the fit. Fails with
    /// [`ScalerError::Destroyed`] after [`destroy`](Self::destroy).
    pub fn set_scale(&mut self) -> Result<ScaleFit, ScalerError> {
        self.ensure_active()?;
        Ok(self.apply_scale())
    }

    /// Replaces the active mode and recomputes.
    pub fn set_mode(&mut self, mode: ScaleMode) -> Result<ScaleFit, ScalerError> {
        self.ensure_active()?;
        self.mode = mode;
        Ok(self.apply_scale())
    }

    /// Returns the active mode. Legal in any state.
    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Recomputes and returns the current fit.
    ///
    /// This is an alias for [`set_scale`](Self::set_scale) rather than a
    /// cached read: the viewport may have changed out of band since the
    /// last recompute.
    pub fn scale_info(&mut self) -> Result<ScaleFit, ScalerError> {
        self.set_scale()
    }

    /// Replaces the design dimensions, re-applies the design box, and
    /// recomputes. Both dimensions must be positive.
    pub fn update_design_size(&mut self, width: f64, height: f64) -> Result<ScaleFit, ScalerError> {
        self.ensure_active()?;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::InvalidDesignWidth(width).into());
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(ConfigError::InvalidDesignHeight(height).into());
        }

        self.design = Size::new(width, height);
        self.host.set_design_box(self.container, self.design);
        Ok(self.apply_scale())
    }

    /// Toggles the viewport-change subscription.
    ///
    /// Idempotent: enabling when already enabled or disabling when already
    /// disabled is a no-op and the host is not called. Enabling after
    /// destruction fails with [`ScalerError::Destroyed`]; disabling after
    /// destruction is a no-op (destroy already unsubscribed).
    pub fn set_auto_resize(&mut self, enabled: bool) -> Result<(), ScalerError> {
        if self.state == ScalerState::Destroyed {
            return if enabled {
                Err(ScalerError::Destroyed)
            } else {
                Ok(())
            };
        }
        if enabled != self.auto_resize {
            self.host.listen_resize(enabled);
            self.auto_resize = enabled;
        }
        Ok(())
    }

    /// Replaces the observer invoked after each completed recompute.
    ///
    /// Takes effect on the next recompute. The observer runs synchronously,
    /// once per recompute, after all style application has happened.
    pub fn set_on_scale_change(&mut self, callback: impl FnMut(&ScaleFit) + 'static) {
        self.on_scale_change = Some(Box::new(callback));
    }

    /// Records a viewport-change signal at `now_ms`, scheduling a debounced
    /// recompute. A newer signal replaces a pending one, so a burst of
    /// signals coalesces into a single recompute. Ignored after destroy.
    pub fn notify_resize(&mut self, now_ms: u64) {
        if self.state == ScalerState::Destroyed {
            return;
        }
        self.debounce.signal(now_ms);
    }

    /// Runs the pending recompute once the quiescence window has elapsed.
    ///
    /// Returns the fresh fit when a recompute ran, `None` otherwise.
    /// [`destroy`](Self::destroy) cancels any pending recompute, so a tick
    /// can never run against a torn-down container.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScaleFit> {
        if self.state == ScalerState::Destroyed {
            return None;
        }
        self.debounce.fire(now_ms).then(|| self.apply_scale())
    }

    /// Tears the scaler down. Idempotent; a second call is a no-op.
    ///
    /// Unsubscribes from the viewport-change signal, cancels any pending
    /// recompute, reverts the container styling, restores the container's
    /// original structural position (removing the wrapper), and transitions
    /// to [`ScalerState::Destroyed`].
    pub fn destroy(&mut self) {
        if self.state == ScalerState::Destroyed {
            return;
        }
        if self.auto_resize {
            self.host.listen_resize(false);
            self.auto_resize = false;
        }
        self.debounce.cancel();
        self.host.clear_styles(self.container);
        self.host.remove_wrapper(self.container, self.wrapper);
        self.state = ScalerState::Destroyed;
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> ScalerState {
        self.state
    }

    /// Returns `true` once [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.state == ScalerState::Destroyed
    }

    /// Returns the fit produced by the most recent recompute, if any.
    #[must_use]
    pub fn last_fit(&self) -> Option<ScaleFit> {
        self.last_fit
    }

    /// Borrows the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrows the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Snapshot of the current controller state for debugging/inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScalerDebugInfo {
        ScalerDebugInfo {
            design: self.design,
            mode: self.mode,
            auto_resize: self.auto_resize,
            state: self.state,
            pending_recompute_at: self.debounce.deadline(),
            last_fit: self.last_fit,
        }
    }

    fn ensure_active(&self) -> Result<(), ScalerError> {
        match self.state {
            ScalerState::Active => Ok(()),
            ScalerState::Destroyed => Err(ScalerError::Destroyed),
        }
    }

    /// Measures, computes, applies, notifies. Infallible; callers gate on
    /// the lifecycle state first.
    fn apply_scale(&mut self) -> ScaleFit {
        let viewport = self.viewport_size();
        let reserve = self.host.scrollbar_reserve();
        let fit = compute(self.mode, self.design, viewport, reserve);

        self.apply_styles(&fit);
        self.last_fit = Some(fit);
        if let Some(observer) = self.on_scale_change.as_mut() {
            observer(&fit);
        }
        fit
    }

    /// Current viewport size with per-axis fallback for extents the host
    /// reports as non-positive (for example before layout has run).
    fn viewport_size(&mut self) -> Size {
        let measured = self.host.content_size(self.wrapper);
        if measured.width > 0.0 && measured.height > 0.0 {
            return measured;
        }
        let fallback = self.host.fallback_viewport();
        Size::new(
            if measured.width > 0.0 {
                measured.width
            } else {
                fallback.width
            },
            if measured.height > 0.0 {
                measured.height
            } else {
                fallback.height
            },
        )
    }

    fn apply_styles(&mut self, fit: &ScaleFit) {
        let placement = match fit.mode {
            ScaleMode::None => Placement::InFlow,
            ScaleMode::Auto | ScaleMode::Stretch => Placement::Anchored,
            // The fitted axis always fills; the cross axis is centered when
            // it fits and left to scroll otherwise.
            ScaleMode::Width => {
                if fit.overflows_y() {
                    Placement::InFlow
                } else {
                    Placement::Anchored
                }
            }
            ScaleMode::Height => {
                if fit.overflows_x() {
                    Placement::InFlow
                } else {
                    Placement::Anchored
                }
            }
        };
        let overflow = if fit.mode == ScaleMode::Stretch {
            Overflow::Hidden
        } else {
            Overflow::Auto
        };

        self.host.place(self.container, fit.scale, fit.offset, placement);
        self.host.set_overflow(self.wrapper, overflow);
    }
}

impl<H: Host> fmt::Debug for Scaler<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scaler")
            .field("design", &self.design)
            .field("mode", &self.mode)
            .field("auto_resize", &self.auto_resize)
            .field("debounce", &self.debounce)
            .field("last_fit", &self.last_fit)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`Scaler`]'s state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalerDebugInfo {
    /// Current design size.
    pub design: Size,
    /// Active fitting policy.
    pub mode: ScaleMode,
    /// Whether the viewport-change subscription is live.
    pub auto_resize: bool,
    /// Lifecycle state.
    pub state: ScalerState,
    /// Deadline of the pending debounced recompute, if one is scheduled.
    pub pending_recompute_at: Option<u64>,
    /// Fit produced by the most recent recompute, if any.
    pub last_fit: Option<ScaleFit>,
}
