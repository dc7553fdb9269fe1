use crate::color::ColorId;

/// A pixel-space coordinate. Signed so proposed selection-box moves can go
/// negative before bounds checking rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A pixel-space extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Drawing capabilities the engine needs from a display backend.
///
/// The concrete windowing technology lives outside this workspace; anything
/// that can plot pixels, lines and rectangles (a window, a terminal cell
/// grid, a test recorder) can present a field. Colors are passed as
/// [`ColorId`] — resolving them to actual pixel values is the backend's
/// business.
pub trait RenderSurface {
    /// Drawable width in pixels.
    fn width(&self) -> u32;

    /// Drawable height in pixels.
    fn height(&self) -> u32;

    fn draw_pixel(&mut self, p: Point, color: ColorId);

    fn draw_line(&mut self, from: Point, to: Point, color: ColorId);

    /// Draw a rectangle from its top-left corner; `filled` selects between
    /// an outline and a solid fill.
    fn draw_rect(&mut self, top_left: Point, size: Size, color: ColorId, filled: bool);
}
