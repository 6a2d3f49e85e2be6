// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scale-mode algorithms: one pure function per fitting policy.

use kurbo::{Size, Vec2};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::fit::{ScaleFactors, ScaleFit};
use crate::mode::ScaleMode;

/// Computes the fit of `design` onto `viewport` under `mode`.
///
/// `scrollbar_reserve` is the pixel width a scrollbar would occupy; it is
/// consulted only by [`ScaleMode::Width`] and [`ScaleMode::Height`], which
/// shrink the fitted extent ahead of time when the aspect ratios predict a
/// scrollbar will appear on the cross axis. This anticipation compares
/// aspect ratios rather than measuring after the fact, so it is a
/// deliberate approximation (it can mispredict when the ratios are nearly
/// equal).
///
/// Zero viewport extents produce a zero scale on that axis rather than a
/// division by zero. Non-positive design extents are a caller contract
/// violation; controllers validate design sizes before invoking the engine.
#[must_use]
pub fn compute(mode: ScaleMode, design: Size, viewport: Size, scrollbar_reserve: f64) -> ScaleFit {
    match mode {
        ScaleMode::None => fit_none(design, viewport),
        ScaleMode::Auto => fit_auto(design, viewport),
        ScaleMode::Width => fit_width(design, viewport, scrollbar_reserve),
        ScaleMode::Height => fit_height(design, viewport, scrollbar_reserve),
        ScaleMode::Stretch => fit_stretch(design, viewport),
    }
}

/// Identity fit: the design is left at its native size.
fn fit_none(design: Size, viewport: Size) -> ScaleFit {
    ScaleFit {
        mode: ScaleMode::None,
        scale: ScaleFactors::uniform(1.0),
        viewport,
        design,
        scaled: design,
        offset: Vec2::ZERO,
    }
}

/// Uniform letterbox/pillarbox fit: the smaller per-axis ratio wins and the
/// scaled content is centered on both axes.
fn fit_auto(design: Size, viewport: Size) -> ScaleFit {
    let sx = viewport.width / design.width.max(f64::MIN_POSITIVE);
    let sy = viewport.height / design.height.max(f64::MIN_POSITIVE);
    let scale = sx.min(sy);

    let scaled = Size::new(design.width * scale, design.height * scale);
    let offset = Vec2::new(
        (viewport.width - scaled.width) / 2.0,
        (viewport.height - scaled.height) / 2.0,
    );

    ScaleFit {
        mode: ScaleMode::Auto,
        scale: ScaleFactors::uniform(scale),
        viewport,
        design,
        scaled,
        offset,
    }
}

/// Fit to the viewport width; vertical overflow is left to scroll.
///
/// When the design aspect ratio is narrower than the viewport's, the scaled
/// height will exceed the viewport height and a vertical scrollbar is
/// anticipated, so the fitted width is reduced by the scrollbar reserve up
/// front. The predicate is cross-multiplied so zero extents stay
/// well-defined.
fn fit_width(design: Size, viewport: Size, scrollbar_reserve: f64) -> ScaleFit {
    let mut effective = viewport.width;
    if design.width * viewport.height < viewport.width * design.height {
        effective = (effective - scrollbar_reserve).max(0.0);
    }

    let scale = effective / design.width.max(f64::MIN_POSITIVE);
    let scaled = Size::new(design.width * scale, design.height * scale);

    // Center vertically only when the scaled content fits; otherwise the
    // offset stays zero and the overflow scrolls.
    let offset_y = if scaled.height <= viewport.height {
        ((viewport.height - scaled.height) / 2.0).floor()
    } else {
        0.0
    };

    ScaleFit {
        mode: ScaleMode::Width,
        scale: ScaleFactors::uniform(scale),
        viewport,
        design,
        scaled,
        offset: Vec2::new(0.0, offset_y),
    }
}

/// Fit to the viewport height; horizontal overflow is left to scroll.
///
/// Mirror of [`fit_width`]: a horizontal scrollbar is anticipated when the
/// design aspect ratio is wider than the viewport's.
fn fit_height(design: Size, viewport: Size, scrollbar_reserve: f64) -> ScaleFit {
    let mut effective = viewport.height;
    if design.width * viewport.height > viewport.width * design.height {
        effective = (effective - scrollbar_reserve).max(0.0);
    }

    let scale = effective / design.height.max(f64::MIN_POSITIVE);
    let scaled = Size::new(design.width * scale, design.height * scale);

    let offset_x = if scaled.width <= viewport.width {
        ((viewport.width - scaled.width) / 2.0).floor()
    } else {
        0.0
    };

    ScaleFit {
        mode: ScaleMode::Height,
        scale: ScaleFactors::uniform(scale),
        viewport,
        design,
        scaled,
        offset: Vec2::new(offset_x, 0.0),
    }
}

/// Independent axis fill: non-uniform scale covering the viewport exactly.
///
/// The reported `ratio` is `min(x, y)` for informational purposes only; it
/// does not participate in the transform.
fn fit_stretch(design: Size, viewport: Size) -> ScaleFit {
    let sx = viewport.width / design.width.max(f64::MIN_POSITIVE);
    let sy = viewport.height / design.height.max(f64::MIN_POSITIVE);

    ScaleFit {
        mode: ScaleMode::Stretch,
        scale: ScaleFactors {
            x: sx,
            y: sy,
            ratio: sx.min(sy),
        },
        viewport,
        design,
        scaled: viewport,
        offset: Vec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn none_is_identity_for_any_viewport() {
        let design = Size::new(1920.0, 1080.0);
        for viewport in [
            Size::new(1280.0, 1024.0),
            Size::new(100.0, 5000.0),
            Size::ZERO,
        ] {
            let fit = compute(ScaleMode::None, design, viewport, 17.0);
            assert_eq!(fit.scale, ScaleFactors::uniform(1.0));
            assert_eq!(fit.scaled, design);
            assert_eq!(fit.offset, Vec2::ZERO);
            assert_eq!(fit.viewport, viewport);
        }
    }

    #[test]
    fn auto_letterboxes_wide_design_in_tall_viewport() {
        // 1920x1080 into 1280x1024: width is the limiting axis.
        let fit = compute(
            ScaleMode::Auto,
            Size::new(1920.0, 1080.0),
            Size::new(1280.0, 1024.0),
            17.0,
        );
        assert_close(fit.scale.x, 2.0 / 3.0);
        assert_close(fit.scale.y, 2.0 / 3.0);
        assert_close(fit.scale.ratio, 2.0 / 3.0);
        assert_close(fit.scaled.width, 1280.0);
        assert_close(fit.scaled.height, 720.0);
        assert_close(fit.offset.x, 0.0);
        assert_close(fit.offset.y, 152.0);
    }

    #[test]
    fn auto_pillarboxes_tall_design_in_wide_viewport() {
        let fit = compute(
            ScaleMode::Auto,
            Size::new(500.0, 1000.0),
            Size::new(2000.0, 1000.0),
            17.0,
        );
        assert_close(fit.scale.ratio, 1.0);
        assert_close(fit.offset.x, 750.0);
        assert_close(fit.offset.y, 0.0);
    }

    #[test]
    fn stretch_covers_viewport_exactly() {
        let fit = compute(
            ScaleMode::Stretch,
            Size::new(1920.0, 1080.0),
            Size::new(1280.0, 1024.0),
            17.0,
        );
        assert_close(fit.scale.x, 1280.0 / 1920.0);
        assert_close(fit.scale.y, 1024.0 / 1080.0);
        assert_close(fit.scale.ratio, fit.scale.x.min(fit.scale.y));
        assert!(!fit.scale.is_uniform());
        assert_eq!(fit.scaled, Size::new(1280.0, 1024.0));
        assert_eq!(fit.offset, Vec2::ZERO);
    }

    #[test]
    fn width_skips_reserve_when_design_is_wider_than_viewport() {
        // Design aspect 1.778 > viewport aspect 1.0: no vertical scrollbar
        // anticipated, so the full width is used.
        let fit = compute(
            ScaleMode::Width,
            Size::new(1920.0, 1080.0),
            Size::new(1000.0, 1000.0),
            17.0,
        );
        assert_close(fit.scale.ratio, 1000.0 / 1920.0);
        assert_close(fit.scaled.height, 562.5);
        // Fits vertically, so the half-gap is floored and applied.
        assert_close(fit.offset.y, 218.0);
        assert_close(fit.offset.x, 0.0);
    }

    #[test]
    fn width_subtracts_reserve_when_vertical_scrollbar_anticipated() {
        // Design aspect 0.5 < viewport aspect 1.25: the scaled height will
        // overflow, so the reserve comes off the fitted width.
        let fit = compute(
            ScaleMode::Width,
            Size::new(800.0, 1600.0),
            Size::new(1000.0, 800.0),
            17.0,
        );
        assert_close(fit.scale.ratio, 983.0 / 800.0);
        assert!(fit.overflows_y());
        assert_eq!(fit.offset, Vec2::ZERO);
    }

    #[test]
    fn height_subtracts_reserve_when_horizontal_scrollbar_anticipated() {
        // Design aspect 1.778 > viewport aspect 1.0: horizontal overflow.
        let fit = compute(
            ScaleMode::Height,
            Size::new(1920.0, 1080.0),
            Size::new(1000.0, 1000.0),
            17.0,
        );
        assert_close(fit.scale.ratio, 983.0 / 1080.0);
        assert!(fit.overflows_x());
        assert_eq!(fit.offset, Vec2::ZERO);
    }

    #[test]
    fn height_centers_horizontally_when_scaled_width_fits() {
        let fit = compute(
            ScaleMode::Height,
            Size::new(500.0, 1000.0),
            Size::new(1000.0, 1000.0),
            17.0,
        );
        assert_close(fit.scale.ratio, 1.0);
        assert_close(fit.offset.x, 250.0);
        assert_close(fit.offset.y, 0.0);
    }

    #[test]
    fn centering_offset_is_floored_in_width_mode() {
        // Half-gap of 218.75 floors to 218.
        let fit = compute(
            ScaleMode::Width,
            Size::new(1920.0, 1080.0),
            Size::new(1000.0, 1000.0),
            17.0,
        );
        assert_eq!(fit.offset.y, 218.0);
    }

    #[test]
    fn zero_viewport_extent_yields_zero_scale_without_panicking() {
        let design = Size::new(1920.0, 1080.0);

        let fit = compute(ScaleMode::Auto, design, Size::ZERO, 17.0);
        assert_eq!(fit.scale.ratio, 0.0);
        assert_eq!(fit.scaled, Size::ZERO);

        let fit = compute(ScaleMode::Stretch, design, Size::new(0.0, 600.0), 17.0);
        assert_eq!(fit.scale.x, 0.0);
        assert_close(fit.scale.y, 600.0 / 1080.0);
        assert_eq!(fit.scale.ratio, 0.0);
    }

    #[test]
    fn reserve_larger_than_viewport_clamps_scale_at_zero() {
        // Reserve exceeds the viewport width; the effective extent clamps
        // at zero instead of going negative.
        let fit = compute(
            ScaleMode::Width,
            Size::new(10.0, 1000.0),
            Size::new(10.0, 400.0),
            17.0,
        );
        assert_eq!(fit.scale.ratio, 0.0);
        assert_eq!(fit.scaled, Size::ZERO);
    }

    #[test]
    fn scaled_size_is_design_times_scale_for_all_modes() {
        let design = Size::new(1440.0, 900.0);
        let viewport = Size::new(1280.0, 1024.0);
        for mode in [
            ScaleMode::None,
            ScaleMode::Auto,
            ScaleMode::Width,
            ScaleMode::Height,
            ScaleMode::Stretch,
        ] {
            let fit = compute(mode, design, viewport, 17.0);
            assert_close(fit.scaled.width, design.width * fit.scale.x);
            assert_close(fit.scaled.height, design.height * fit.scale.y);
            assert_close(fit.scale.ratio, fit.scale.x.min(fit.scale.y));
        }
    }

    #[test]
    fn recompute_with_same_inputs_is_identical() {
        let design = Size::new(1920.0, 1080.0);
        let viewport = Size::new(977.0, 613.0);
        for mode in [ScaleMode::Auto, ScaleMode::Width, ScaleMode::Stretch] {
            let a = compute(mode, design, viewport, 17.0);
            let b = compute(mode, design, viewport, 17.0);
            assert_eq!(a, b);
        }
    }
}
