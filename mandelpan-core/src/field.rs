use std::time::Instant;

use tracing::info;

use crate::config::FractalConfig;
use crate::mandelbrot::escape_count;
use crate::viewport::Viewport;

/// A full grid of per-pixel iteration counts for one viewport.
///
/// Row-major, `height` rows × `width` columns; every cell lies in
/// `[0, iterations]`, with a cell equal to `iterations` marking an in-set
/// point. Produced once per distinct [`FractalConfig`] and never mutated in
/// place — a configuration change produces a whole new field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub width: u32,
    pub height: u32,
    pub iterations: u32,
    data: Vec<u32>,
}

impl Field {
    /// Evaluate every pixel of the configured grid.
    ///
    /// This is the dominant cost center: `O(width × height × iterations)`
    /// worst case, with early termination for escaping points. Blocking and
    /// CPU-bound; callers needing responsiveness should run it on a worker
    /// thread and treat completion as a single event.
    pub fn compute(config: &FractalConfig) -> Self {
        let start = Instant::now();
        let viewport = Viewport::derive(config);

        let mut data = Vec::with_capacity(config.width as usize * config.height as usize);
        for py in 0..config.height {
            for px in 0..config.width {
                let c = viewport.pixel_to_complex(px, py);
                data.push(escape_count(c, config));
            }
        }

        let interior = data.iter().filter(|&&n| n == config.iterations).count();
        info!(
            elapsed_ms = start.elapsed().as_millis(),
            width = config.width,
            height = config.height,
            iterations = config.iterations,
            interior_cells = interior,
            "Field computed"
        );

        Self {
            width: config.width,
            height: config.height,
            iterations: config.iterations,
            data,
        }
    }

    /// Iteration count at `(x, y)`, top-left origin.
    ///
    /// Panics in debug builds if the coordinate is outside the grid; callers
    /// iterate within `width`/`height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize]
    }

    /// The raw row-major cell data.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// True when the cell holds an in-set point (the orbit never escaped).
    #[inline]
    pub fn is_interior(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == self.iterations
    }
}
