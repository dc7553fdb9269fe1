use crate::complex::Complex;
use crate::config::FractalConfig;

/// Per-pixel mapping derived from a [`FractalConfig`].
///
/// Holds the step sizes that map grid columns/rows onto the plane rectangle,
/// plus the pixel coordinates where the real and imaginary axes cross zero
/// (used to draw crosshair guide lines). Recomputed whenever the
/// configuration changes; immutable otherwise. The axis-crossing pixels have
/// no effect on the fractal computation itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Plane units per pixel column. Strictly positive for a valid config.
    pub xstep: f64,

    /// Plane units per pixel row. Strictly positive for a valid config.
    pub ystep: f64,

    /// First column whose real coordinate is non-negative — where the
    /// imaginary axis (`re = 0`) crosses. Equals `width` when the axis lies
    /// right of the viewport.
    pub x_axis_pixel: u32,

    /// Rows counted from the *bottom* edge to the real axis (`im = 0`).
    /// Equals `height` when the axis lies above the viewport. Use
    /// [`y_axis_row`](Self::y_axis_row) for top-down drawing coordinates.
    pub y_axis_pixel: u32,

    /// Grid width in pixels, copied from the config.
    pub width: u32,

    /// Grid height in pixels, copied from the config.
    pub height: u32,

    left: f64,
    top: f64,
}

impl Viewport {
    /// Derive step sizes and axis-crossing pixels from a validated config.
    pub fn derive(config: &FractalConfig) -> Self {
        let xstep = (config.right - config.left) / config.width as f64;
        let ystep = (config.top - config.bottom) / config.height as f64;

        // Scan columns from the left edge until the real coordinate turns
        // non-negative; `width` means the axis never enters the viewport.
        let mut x_axis_pixel = config.width;
        for x in 0..config.width {
            if config.left + x as f64 * xstep >= 0.0 {
                x_axis_pixel = x;
                break;
            }
        }

        // Symmetric scan over rows, from the bottom edge upward.
        let mut y_axis_pixel = config.height;
        for y in 0..config.height {
            if config.bottom + y as f64 * ystep >= 0.0 {
                y_axis_pixel = y;
                break;
            }
        }

        Self {
            xstep,
            ystep,
            x_axis_pixel,
            y_axis_pixel,
            width: config.width,
            height: config.height,
            left: config.left,
            top: config.top,
        }
    }

    /// Map a pixel coordinate to a point on the complex plane.
    ///
    /// `(0, 0)` is the top-left pixel. The y-axis is flipped so that
    /// increasing pixel-y moves downward (decreasing imaginary part).
    #[inline]
    pub fn pixel_to_complex(&self, px: u32, py: u32) -> Complex {
        Complex::new(
            self.left + px as f64 * self.xstep,
            self.top - py as f64 * self.ystep,
        )
    }

    /// The real-axis crossing as a top-down row index, clamped to the grid
    /// so a crosshair can always be drawn at the nearest edge.
    pub fn y_axis_row(&self) -> u32 {
        (self.height - self.y_axis_pixel).min(self.height - 1)
    }

    /// The imaginary-axis crossing as a column index, clamped to the grid.
    pub fn x_axis_col(&self) -> u32 {
        self.x_axis_pixel.min(self.width - 1)
    }
}
