use tracing::debug;

use crate::error::CoreError;

/// Immutable description of one view onto the complex plane.
///
/// Combines the pixel grid (`width` × `height`), the plane rectangle
/// (`left..right` × `bottom..top`), the iteration cap and the escape radius.
/// The cached `limit_sq` field is recomputed on deserialization so a restored
/// configuration always stays consistent with its `limit`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FractalConfig {
    /// Iteration cap — a point that survives this many steps is "in the set".
    pub iterations: u32,

    /// Pixel grid width.
    pub width: u32,

    /// Pixel grid height.
    pub height: u32,

    /// Real-axis lower bound of the plane rectangle.
    pub left: f64,

    /// Real-axis upper bound. Invariant: `right > left`.
    pub right: f64,

    /// Imaginary-axis upper bound. Invariant: `top > bottom`.
    pub top: f64,

    /// Imaginary-axis lower bound.
    pub bottom: f64,

    /// Escape radius — an orbit whose magnitude exceeds this has escaped.
    /// The iteration loop compares against `limit²`.
    pub limit: f64,

    /// Cached `limit * limit`, precomputed to keep the square out of the
    /// per-iteration comparison.
    #[serde(skip)]
    limit_sq: f64,
}

/// Helper for deserialization — recomputes the cached square on load.
impl<'de> serde::Deserialize<'de> for FractalConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            iterations: u32,
            width: u32,
            height: u32,
            left: f64,
            right: f64,
            top: f64,
            bottom: f64,
            limit: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        FractalConfig::new(
            raw.iterations,
            raw.width,
            raw.height,
            raw.left,
            raw.right,
            raw.top,
            raw.bottom,
            raw.limit,
        )
        .map_err(serde::de::Error::custom)
    }
}

impl FractalConfig {
    pub const DEFAULT_ITERATIONS: u32 = 200;
    pub const DEFAULT_WIDTH: u32 = 400;
    pub const DEFAULT_HEIGHT: u32 = 300;
    pub const DEFAULT_LEFT: f64 = -1.5;
    pub const DEFAULT_RIGHT: f64 = 1.0;
    pub const DEFAULT_TOP: f64 = 1.0;
    pub const DEFAULT_BOTTOM: f64 = -1.0;
    pub const DEFAULT_LIMIT: f64 = 2.0;

    /// Validating constructor. Rejects empty grids, inverted or non-finite
    /// plane ranges, a zero iteration cap, and a non-positive escape radius.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        iterations: u32,
        width: u32,
        height: u32,
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        limit: f64,
    ) -> crate::Result<Self> {
        if iterations < 1 {
            return Err(CoreError::InvalidIterations(iterations));
        }
        if width < 1 || height < 1 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        if !(left.is_finite() && right.is_finite()) || right <= left {
            return Err(CoreError::InvalidPlaneRange {
                axis: "real",
                lo: left,
                hi: right,
            });
        }
        if !(bottom.is_finite() && top.is_finite()) || top <= bottom {
            return Err(CoreError::InvalidPlaneRange {
                axis: "imaginary",
                lo: bottom,
                hi: top,
            });
        }
        if limit <= 0.0 || !limit.is_finite() {
            return Err(CoreError::InvalidLimit(limit));
        }

        debug!(
            iterations,
            width, height, left, right, top, bottom, limit, "Configuration accepted"
        );

        Ok(Self {
            iterations,
            width,
            height,
            left,
            right,
            top,
            bottom,
            limit,
            limit_sq: limit * limit,
        })
    }

    /// Pre-computed squared escape radius for the inner loop.
    #[inline]
    pub fn limit_sq(&self) -> f64 {
        self.limit_sq
    }

    /// Return a copy with a different iteration cap.
    pub fn with_iterations(self, iterations: u32) -> crate::Result<Self> {
        Self::new(
            iterations,
            self.width,
            self.height,
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.limit,
        )
    }

    /// Return a copy with different grid dimensions (window resize).
    pub fn with_grid(self, width: u32, height: u32) -> crate::Result<Self> {
        Self::new(
            self.iterations,
            width,
            height,
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.limit,
        )
    }

    /// Return a copy framing a different plane rectangle.
    pub fn with_plane(self, left: f64, right: f64, top: f64, bottom: f64) -> crate::Result<Self> {
        Self::new(
            self.iterations,
            self.width,
            self.height,
            left,
            right,
            top,
            bottom,
            self.limit,
        )
    }
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            left: Self::DEFAULT_LEFT,
            right: Self::DEFAULT_RIGHT,
            top: Self::DEFAULT_TOP,
            bottom: Self::DEFAULT_BOTTOM,
            limit: Self::DEFAULT_LIMIT,
            limit_sq: Self::DEFAULT_LIMIT * Self::DEFAULT_LIMIT,
        }
    }
}
