// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=screenfit_scaler --heading-base-level=0

//! Screenfit Scaler: the controller that keeps a fixed-design container
//! fitted to its viewport.
//!
//! This crate wraps the pure fit math of `screenfit_engine` with
//! everything stateful: validated configuration, the active → destroyed
//! lifecycle, the debounced resize trigger, style application through an
//! environment seam, and a single-slot change observer.
//!
//! ## Layering
//!
//! The scaler is headless. It owns no element tree and reads no clock;
//! both come from the caller:
//!
//! - The [`Host`] trait supplies every environment capability: container
//!   resolution, structural wrapping, style application, viewport
//!   measurement, the scrollbar reservation, and the resize subscription.
//! - Timekeeping is caller-driven: the environment reports resize signals
//!   via [`Scaler::notify_resize`] with a millisecond timestamp and pumps
//!   [`Scaler::tick`] (from its timer or frame loop) to run the recompute
//!   once the quiescence window elapses. At most one recompute is pending
//!   at a time; the newest signal wins.
//!
//! ## Lifecycle
//!
//! `Active --destroy()--> Destroyed`, exactly once. After
//! [`Scaler::destroy`], mutating operations fail with
//! [`ScalerError::Destroyed`]; queries like [`Scaler::mode`] remain legal.
//! Destruction unwinds everything construction did: subscription, pending
//! recompute, container styling, and the structural wrapper.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use screenfit_engine::ScaleFactors;
//! use screenfit_scaler::{
//!     ContainerRef, Host, Overflow, Placement, Scaler, ScalerConfig, ScalerError,
//! };
//!
//! // A toy host: one window whose content size the test controls.
//! struct WindowHost {
//!     size: Size,
//!     listening: bool,
//! }
//!
//! impl Host for WindowHost {
//!     type Handle = u32;
//!
//!     fn resolve(&mut self, container: &ContainerRef<u32>) -> Option<u32> {
//!         match container {
//!             ContainerRef::Handle(h) => Some(*h),
//!             ContainerRef::Selector(_) => Some(1),
//!         }
//!     }
//!     fn insert_wrapper(&mut self, _container: u32) -> u32 {
//!         100
//!     }
//!     fn remove_wrapper(&mut self, _container: u32, _wrapper: u32) {}
//!     fn set_design_box(&mut self, _container: u32, _size: Size) {}
//!     fn place(&mut self, _c: u32, _s: ScaleFactors, _o: Vec2, _p: Placement) {}
//!     fn set_overflow(&mut self, _wrapper: u32, _overflow: Overflow) {}
//!     fn clear_styles(&mut self, _handle: u32) {}
//!     fn content_size(&mut self, _wrapper: u32) -> Size {
//!         self.size
//!     }
//!     fn fallback_viewport(&mut self) -> Size {
//!         self.size
//!     }
//!     fn listen_resize(&mut self, enabled: bool) {
//!         self.listening = enabled;
//!     }
//! }
//!
//! let host = WindowHost {
//!     size: Size::new(1280.0, 1024.0),
//!     listening: false,
//! };
//! let mut scaler = Scaler::new(host, ScalerConfig::new(1_u32, 1920.0, 1080.0))?;
//!
//! let fit = scaler.set_scale()?;
//! assert!((fit.scale.ratio - 2.0 / 3.0).abs() < 1e-9);
//!
//! // A resize signal schedules a debounced recompute; it runs on the
//! // first tick after the quiescence window.
//! scaler.notify_resize(1_000);
//! assert!(scaler.tick(1_050).is_none());
//! scaler.host_mut().size = Size::new(1920.0, 1080.0);
//! let fit = scaler.tick(1_100).unwrap();
//! assert!((fit.scale.ratio - 1.0).abs() < 1e-9);
//!
//! scaler.destroy();
//! assert!(scaler.set_scale().is_err());
//! # Ok::<(), ScalerError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod debounce;
mod error;
mod host;
mod scaler;

pub use config::{ContainerRef, ScalerConfig};
pub use debounce::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use error::{ConfigError, ScalerError};
pub use host::{DEFAULT_SCROLLBAR_RESERVE, Host, Overflow, Placement};
pub use scaler::{Scaler, ScalerDebugInfo, ScalerState};

// Re-export the engine types that appear in this crate's public API.
pub use screenfit_engine::{ScaleFactors, ScaleFit, ScaleMode};
