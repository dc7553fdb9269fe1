use tracing::debug;

use mandelpan_core::{FieldCache, FractalConfig, Viewport};

use crate::color::ColorId;
use crate::navigator::{Direction, Navigator};
use crate::palette::Palette;
use crate::surface::{Point, RenderSurface};

/// Discrete input events delivered by an external event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    Refresh,
    Quit,
}

/// What the caller should do after handing an event to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Repaint via [`Session::draw`]; the field cache decides whether any
    /// recomputation happens.
    Redraw,
    /// Nothing changed (e.g. an out-of-bounds pan).
    Ignored,
    /// The event loop should exit.
    Quit,
}

/// Color used for the axis crosshair guide lines.
const AXIS_COLOR: ColorId = ColorId::Grey;

/// Color used for the selection-box outline.
const SELECTION_COLOR: ColorId = ColorId::BrightRed;

/// Ties configuration, field cache, palette and navigator together behind
/// the two calls an event loop needs: [`handle`](Self::handle) and
/// [`draw`](Self::draw).
///
/// Panning and refresh only schedule redraws; the cached field survives
/// them. Replacing the configuration is the one operation that invalidates
/// the cache.
#[derive(Debug)]
pub struct Session {
    config: FractalConfig,
    viewport: Viewport,
    cache: FieldCache,
    palette: Palette,
    navigator: Navigator,
}

impl Session {
    pub fn new(config: FractalConfig, palette: Palette) -> Self {
        Self {
            viewport: Viewport::derive(&config),
            navigator: Navigator::new(config.width, config.height),
            cache: FieldCache::new(),
            config,
            palette,
        }
    }

    /// Build a session whose grid matches the surface's drawable area.
    pub fn sized_to(
        surface: &dyn RenderSurface,
        config: FractalConfig,
        palette: Palette,
    ) -> crate::Result<Self> {
        let config = config.with_grid(surface.width(), surface.height())?;
        Ok(Self::new(config, palette))
    }

    /// Translate one input event into a navigator transition.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        debug!(?event, "Handling input event");
        let accepted = match event {
            InputEvent::PanLeft => self.navigator.pan(Direction::Left),
            InputEvent::PanRight => self.navigator.pan(Direction::Right),
            InputEvent::PanUp => self.navigator.pan(Direction::Up),
            InputEvent::PanDown => self.navigator.pan(Direction::Down),
            InputEvent::Refresh => {
                self.navigator.refresh();
                true
            }
            InputEvent::Quit => return Outcome::Quit,
        };

        if accepted {
            Outcome::Redraw
        } else {
            Outcome::Ignored
        }
    }

    /// Repaint the whole view: field pixels, axis crosshair, selection box.
    ///
    /// Reuses the cached field when the configuration is unchanged, so a
    /// redraw after a pan or expose performs no iteration work.
    pub fn draw(&mut self, surface: &mut dyn RenderSurface) {
        let field = self.cache.get_or_compute(&self.config);
        let iterations = field.iterations;

        for (y, row) in field.rows().enumerate() {
            for (x, &count) in row.iter().enumerate() {
                let color = self.palette.color_for(count, iterations);
                surface.draw_pixel(Point::new(x as i32, y as i32), color);
            }
        }

        // Crosshair guide lines where the axes cross zero (clamped to the
        // grid edge when an axis is out of view).
        let col = self.viewport.x_axis_col() as i32;
        let row = self.viewport.y_axis_row() as i32;
        let right = self.config.width as i32 - 1;
        let bottom = self.config.height as i32 - 1;
        surface.draw_line(Point::new(col, 0), Point::new(col, bottom), AXIS_COLOR);
        surface.draw_line(Point::new(0, row), Point::new(right, row), AXIS_COLOR);

        let sel = self.navigator.selection();
        surface.draw_rect(sel.top_left, sel.size, SELECTION_COLOR, false);

        self.navigator.take_redraw();
    }

    /// Replace the configuration: re-derives the viewport, resets the
    /// navigator to the new grid and invalidates the cached field. This is
    /// the only path that forces a recompute.
    pub fn set_config(&mut self, config: FractalConfig) {
        debug!(
            width = config.width,
            height = config.height,
            iterations = config.iterations,
            "Replacing configuration"
        );
        self.viewport = Viewport::derive(&config);
        self.navigator = Navigator::new(config.width, config.height);
        self.cache.invalidate();
        self.config = config;
    }

    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Evaluator invocations so far (cache statistics).
    pub fn computes(&self) -> u64 {
        self.cache.computes()
    }
}
