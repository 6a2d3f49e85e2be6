// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

use crate::mode::ScaleMode;

/// Per-axis scale factors plus the informational uniform ratio.
///
/// For the uniform modes (`none`, `auto`, `width`, `height`) all three
/// fields are equal. For `stretch`, `x` and `y` differ and `ratio` reports
/// `min(x, y)` for callers that want a single representative factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    /// Horizontal scale factor.
    pub x: f64,
    /// Vertical scale factor.
    pub y: f64,
    /// `min(x, y)`; the uniform factor, or the representative factor for
    /// non-uniform fits.
    pub ratio: f64,
}

impl ScaleFactors {
    pub(crate) fn uniform(scale: f64) -> Self {
        Self {
            x: scale,
            y: scale,
            ratio: scale,
        }
    }

    /// Returns `true` when both axes share the same factor.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.x == self.y
    }
}

/// Derived fit geometry: the output of [`crate::compute`].
///
/// A `ScaleFit` is a value, recomputed on demand and never mutated in
/// place. It records the inputs it was derived from (`mode`, `design`,
/// `viewport`) alongside the derived scale, scaled size, and centering
/// offset, so observers can reason about the fit without re-querying the
/// environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFit {
    /// The fitting policy this result was computed under.
    pub mode: ScaleMode,
    /// Derived per-axis scale factors.
    pub scale: ScaleFactors,
    /// The viewport size the fit was computed against.
    pub viewport: Size,
    /// The design size the fit was computed against.
    pub design: Size,
    /// `design * scale`, component-wise.
    pub scaled: Size,
    /// Translation placing the scaled content inside the viewport.
    ///
    /// Non-zero only along axes where the scaled content fits and is
    /// centered; zero along axes left to overflow/scroll.
    pub offset: Vec2,
}

impl ScaleFit {
    /// Returns the design-to-viewport transform as an affine map.
    ///
    /// The transform scales design coordinates by the per-axis factors and
    /// then translates by the centering offset, so design-space points map
    /// directly to viewport-space pixels.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }

    /// Returns `true` when the scaled width exceeds the viewport width.
    #[must_use]
    pub fn overflows_x(&self) -> bool {
        self.scaled.width > self.viewport.width
    }

    /// Returns `true` when the scaled height exceeds the viewport height.
    #[must_use]
    pub fn overflows_y(&self) -> bool {
        self.scaled.height > self.viewport.height
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::*;

    #[test]
    fn uniform_factors() {
        let s = ScaleFactors::uniform(0.5);
        assert!(s.is_uniform());
        assert_eq!(s.x, 0.5);
        assert_eq!(s.y, 0.5);
        assert_eq!(s.ratio, 0.5);
    }

    #[test]
    fn transform_maps_design_corners_to_viewport() {
        let fit = ScaleFit {
            mode: ScaleMode::Auto,
            scale: ScaleFactors::uniform(0.5),
            viewport: Size::new(1000.0, 600.0),
            design: Size::new(1600.0, 900.0),
            scaled: Size::new(800.0, 450.0),
            offset: Vec2::new(100.0, 75.0),
        };

        let origin = fit.transform() * Point::ZERO;
        assert_eq!(origin, Point::new(100.0, 75.0));

        let far = fit.transform() * Point::new(1600.0, 900.0);
        assert_eq!(far, Point::new(900.0, 525.0));
    }

    #[test]
    fn overflow_queries_compare_scaled_to_viewport() {
        let fit = ScaleFit {
            mode: ScaleMode::Width,
            scale: ScaleFactors::uniform(1.0),
            viewport: Size::new(500.0, 400.0),
            design: Size::new(500.0, 900.0),
            scaled: Size::new(500.0, 900.0),
            offset: Vec2::ZERO,
        };
        assert!(!fit.overflows_x());
        assert!(fit.overflows_y());
    }
}
