use mandelpan_core::FractalConfig;
use mandelpan_view::{
    ColorId, InputEvent, Outcome, Palette, Point, RenderSurface, Session, Size,
};

/// Test double that records every draw call.
#[derive(Debug, Default)]
struct RecordingSurface {
    width: u32,
    height: u32,
    pixels: Vec<(Point, ColorId)>,
    lines: Vec<(Point, Point, ColorId)>,
    rects: Vec<(Point, Size, ColorId, bool)>,
}

impl RecordingSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn clear(&mut self) {
        self.pixels.clear();
        self.lines.clear();
        self.rects.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_pixel(&mut self, p: Point, color: ColorId) {
        self.pixels.push((p, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: ColorId) {
        self.lines.push((from, to, color));
    }

    fn draw_rect(&mut self, top_left: Point, size: Size, color: ColorId, filled: bool) {
        self.rects.push((top_left, size, color, filled));
    }
}

fn test_config() -> FractalConfig {
    FractalConfig::new(20, 40, 40, -2.0, 2.0, 2.0, -2.0, 2.0).unwrap()
}

#[test]
fn draw_covers_every_pixel_once() {
    let mut surface = RecordingSurface::new(40, 40);
    let mut session = Session::new(test_config(), Palette::default());

    session.draw(&mut surface);

    assert_eq!(surface.pixels.len(), 40 * 40);
    assert_eq!(surface.lines.len(), 2, "two axis guide lines");
    assert_eq!(surface.rects.len(), 1, "one selection box");
}

#[test]
fn selection_box_is_unfilled_bright_red() {
    let mut surface = RecordingSurface::new(40, 40);
    let mut session = Session::new(test_config(), Palette::default());

    session.draw(&mut surface);

    let (top_left, size, color, filled) = surface.rects[0];
    assert_eq!(top_left, Point::new(0, 0));
    assert_eq!(size, Size::new(4, 4));
    assert_eq!(color, ColorId::BrightRed);
    assert!(!filled);
}

#[test]
fn axis_guides_cross_at_plane_origin() {
    let mut surface = RecordingSurface::new(40, 40);
    let mut session = Session::new(test_config(), Palette::default());

    session.draw(&mut surface);

    // Plane is [-2,2]² on a 40×40 grid, so both axes cross at pixel 20.
    let (v_from, v_to, _) = surface.lines[0];
    assert_eq!((v_from, v_to), (Point::new(20, 0), Point::new(20, 39)));
    let (h_from, h_to, _) = surface.lines[1];
    assert_eq!((h_from, h_to), (Point::new(0, 20), Point::new(39, 20)));
}

#[test]
fn interior_pixels_use_the_in_set_color() {
    let mut surface = RecordingSurface::new(40, 40);
    let palette = Palette::default();
    let in_set = palette.in_set_color();
    let mut session = Session::new(test_config(), palette);

    session.draw(&mut surface);

    // The grid center maps to c = 0, which never escapes.
    let center = surface
        .pixels
        .iter()
        .find(|(p, _)| *p == Point::new(20, 20))
        .copied();
    assert_eq!(center.map(|(_, c)| c), Some(in_set));

    // The corner escapes immediately and must not share that color.
    let corner = surface
        .pixels
        .iter()
        .find(|(p, _)| *p == Point::new(0, 0))
        .copied();
    assert_ne!(corner.map(|(_, c)| c), Some(in_set));
}

#[test]
fn pan_and_refresh_reuse_the_cached_field() {
    let mut surface = RecordingSurface::new(40, 40);
    let mut session = Session::new(test_config(), Palette::default());

    session.draw(&mut surface);
    assert_eq!(session.computes(), 1);

    assert_eq!(session.handle(InputEvent::PanRight), Outcome::Redraw);
    surface.clear();
    session.draw(&mut surface);
    assert_eq!(session.computes(), 1, "panning must not recompute");

    assert_eq!(session.handle(InputEvent::Refresh), Outcome::Redraw);
    surface.clear();
    session.draw(&mut surface);
    assert_eq!(session.computes(), 1, "refresh must not recompute");
}

#[test]
fn pan_moves_the_drawn_selection_box() {
    let mut surface = RecordingSurface::new(40, 40);
    let mut session = Session::new(test_config(), Palette::default());

    session.handle(InputEvent::PanRight);
    session.handle(InputEvent::PanDown);
    session.draw(&mut surface);

    let (top_left, ..) = surface.rects[0];
    assert_eq!(top_left, Point::new(4, 4));
}

#[test]
fn config_change_recomputes_exactly_once() {
    let mut surface = RecordingSurface::new(40, 40);
    let mut session = Session::new(test_config(), Palette::default());

    session.draw(&mut surface);
    assert_eq!(session.computes(), 1);

    let reframed = session
        .config()
        .with_plane(-1.0, 1.0, 1.0, -1.0)
        .unwrap();
    session.set_config(reframed);

    surface.clear();
    session.draw(&mut surface);
    assert_eq!(session.computes(), 2);

    surface.clear();
    session.draw(&mut surface);
    assert_eq!(session.computes(), 2, "unchanged config stays cached");
}

#[test]
fn sized_to_adopts_surface_dimensions() {
    let surface = RecordingSurface::new(64, 48);
    let session = Session::sized_to(&surface, test_config(), Palette::default()).unwrap();
    assert_eq!(session.config().width, 64);
    assert_eq!(session.config().height, 48);
}

#[test]
fn sized_to_rejects_empty_surface() {
    let surface = RecordingSurface::new(0, 48);
    assert!(Session::sized_to(&surface, test_config(), Palette::default()).is_err());
}
