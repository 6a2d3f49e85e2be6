// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=screenfit_engine --heading-base-level=0

//! Screenfit Engine: pure fit math for mapping a fixed design rectangle
//! onto a variable viewport.
//!
//! This crate is the computational core of a display-scaling utility used
//! to make fixed-size content (dashboards, kiosk UIs) fit arbitrary
//! screens. Given a design size, a viewport size, a [`ScaleMode`], and a
//! scrollbar reservation, [`compute`] derives a [`ScaleFit`]: per-axis
//! scale factors, the scaled content size, and a centering offset.
//!
//! It does **not** own any element tree, styling surface, or resize event
//! source. Callers are expected to:
//! - Measure the current viewport themselves and call [`compute`] with
//!   plain numeric sizes.
//! - Apply [`ScaleFit::transform`] (or the raw factors and offset) to
//!   whatever rendering environment they manage.
//! - Re-invoke [`compute`] whenever the viewport changes; every call
//!   produces a fresh value and no state is retained here.
//!
//! The lifecycle, recompute debouncing, and environment plumbing live in
//! the companion `screenfit_scaler` crate.
//!
//! ## Modes
//!
//! - [`ScaleMode::None`]: identity, an escape hatch for "do not adapt".
//! - [`ScaleMode::Auto`]: uniform letterbox/pillarbox fit, centered.
//! - [`ScaleMode::Width`]: fit to width, scroll vertically on overflow.
//! - [`ScaleMode::Height`]: fit to height, scroll horizontally on overflow.
//! - [`ScaleMode::Stretch`]: non-uniform fill of both axes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use screenfit_engine::{compute, ScaleMode};
//!
//! // A 1920x1080 dashboard shown on a 1280x1024 screen.
//! let design = Size::new(1920.0, 1080.0);
//! let viewport = Size::new(1280.0, 1024.0);
//!
//! let fit = compute(ScaleMode::Auto, design, viewport, 17.0);
//! assert!((fit.scale.ratio - 2.0 / 3.0).abs() < 1e-9);
//! assert!((fit.scaled.height - 720.0).abs() < 1e-9);
//! assert!((fit.offset.y - 152.0).abs() < 1e-9);
//!
//! // The derived affine maps design-space points onto the screen.
//! let transform = fit.transform();
//! ```
//!
//! ## Design notes
//!
//! - All geometry uses [`kurbo`] types (`Size`, `Vec2`, `Affine`).
//! - The `width`/`height` modes shrink their fitted extent by the
//!   scrollbar reservation when the design/viewport aspect ratios predict
//!   a cross-axis scrollbar. This anticipates the scrollbar instead of
//!   measuring after the scale is applied, and is kept as an approximation
//!   on purpose.
//! - Zero viewport extents yield a zero scale on that axis; non-positive
//!   design sizes are rejected upstream and never reach this crate.
//!
//! This crate is `no_std`.

#![no_std]

mod compute;
mod fit;
mod mode;

pub use compute::compute;
pub use fit::{ScaleFactors, ScaleFit};
pub use mode::{ScaleMode, UnknownModeError};
