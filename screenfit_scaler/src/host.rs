// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The environment collaborator contract.
//!
//! The scaler is headless: it never touches a concrete element tree or
//! event loop. Everything environment-specific — resolving the container,
//! wrapping it, applying geometry styles, measuring the wrapper, and
//! (un)subscribing the resize signal — goes through the [`Host`] trait.
//! Tests drive the scaler with a recording mock host; real integrations
//! implement `Host` over their rendering environment.

use kurbo::{Size, Vec2};

use screenfit_engine::ScaleFactors;

use crate::config::ContainerRef;

/// Default pixel width reserved for an anticipated scrollbar.
///
/// Hosts that can probe the platform's real scrollbar width should override
/// [`Host::scrollbar_reserve`]; this constant is the common classic-desktop
/// value.
pub const DEFAULT_SCROLLBAR_RESERVE: f64 = 17.0;

/// How the scaled container is positioned inside its wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Positioned in normal flow at the wrapper origin; overflow along the
    /// unfitted axis is left to scroll.
    InFlow,
    /// Positioned absolutely at the fit's offset (used when the scaled
    /// content fits and is centered).
    Anchored,
}

/// Overflow clipping policy applied to the wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    /// Show scrollbars as needed.
    Auto,
    /// Clip; used by the stretch mode, which fills the wrapper exactly.
    Hidden,
}

/// Environment capabilities the scaler requires.
///
/// A `Host` owns the element tree (or equivalent). The scaler holds
/// exclusive ownership of one container handle and the wrapper it inserts
/// around it; no two scalers may manage the same container.
pub trait Host {
    /// Addressable element handle. Cheap to copy; stays valid for the
    /// lifetime of the scaler that holds it.
    type Handle: Copy;

    /// Resolves a container reference to exactly one element handle, or
    /// `None` when nothing matches.
    fn resolve(&mut self, container: &ContainerRef<Self::Handle>) -> Option<Self::Handle>;

    /// Inserts a new wrapper element at `container`'s current position in
    /// its parent, moves `container` inside it, and returns the wrapper.
    fn insert_wrapper(&mut self, container: Self::Handle) -> Self::Handle;

    /// Reverses [`insert_wrapper`](Host::insert_wrapper): moves `container`
    /// back to the wrapper's position and removes the wrapper.
    fn remove_wrapper(&mut self, container: Self::Handle, wrapper: Self::Handle);

    /// Fixes the container's box to the design size, with the transform
    /// origin at the top-left corner.
    fn set_design_box(&mut self, container: Self::Handle, size: Size);

    /// Applies the computed transform: per-axis scale factors, translation
    /// offset, and positioning mode.
    fn place(
        &mut self,
        container: Self::Handle,
        scale: ScaleFactors,
        offset: Vec2,
        placement: Placement,
    );

    /// Sets the wrapper's overflow clipping policy.
    fn set_overflow(&mut self, wrapper: Self::Handle, overflow: Overflow);

    /// Clears every style this scaler applied to `handle`, back to unset.
    fn clear_styles(&mut self, handle: Self::Handle);

    /// Returns the wrapper's current content-box size in pixels.
    ///
    /// May legitimately report non-positive extents before layout has run;
    /// the scaler substitutes [`fallback_viewport`](Host::fallback_viewport)
    /// per axis in that case.
    fn content_size(&mut self, wrapper: Self::Handle) -> Size;

    /// Platform-reported global viewport size, used as the per-axis
    /// fallback when the measured content size is non-positive.
    fn fallback_viewport(&mut self) -> Size;

    /// Pixel width a scrollbar occupies, consumed by the width/height
    /// modes' anticipatory correction.
    fn scrollbar_reserve(&mut self) -> f64 {
        DEFAULT_SCROLLBAR_RESERVE
    }

    /// Subscribes (`true`) or unsubscribes (`false`) the scaler from the
    /// environment's viewport-change signal. The scaler guarantees
    /// balanced, non-repeated calls; hosts need not defend against double
    /// subscription.
    fn listen_resize(&mut self, enabled: bool);
}
