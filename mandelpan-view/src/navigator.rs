use tracing::debug;

use crate::surface::{Point, Size};

/// A directional pan request for the selection box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The movable highlight rectangle drawn over the field.
///
/// Size is fixed at construction (one tenth of the grid per axis); only the
/// position moves, and only through [`Navigator::pan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBox {
    pub top_left: Point,
    pub size: Size,
}

/// Redraw bookkeeping: `Moved` marks an accepted transition awaiting redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavState {
    Idle,
    Moved,
}

/// Tracks the selection box in pixel space and validates proposed moves
/// against the grid bounds.
///
/// Panning only changes where the highlight is drawn — it never touches the
/// underlying plane rectangle, so an accepted move asks for a redraw but
/// never for a field recompute.
#[derive(Debug)]
pub struct Navigator {
    width: u32,
    height: u32,
    step_x: i32,
    step_y: i32,
    selection: SelectionBox,
    state: NavState,
}

impl Navigator {
    /// Build a navigator for a `width` × `height` pixel grid. The selection
    /// box starts at the origin, sized to a tenth of the grid per axis.
    pub fn new(width: u32, height: u32) -> Self {
        let step_x = (width / 10) as i32;
        let step_y = (height / 10) as i32;
        Self {
            width,
            height,
            step_x,
            step_y,
            selection: SelectionBox {
                top_left: Point::new(0, 0),
                size: Size::new(width / 10, height / 10),
            },
            state: NavState::Idle,
        }
    }

    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Propose a one-step move of the selection box.
    ///
    /// Accepted only when both the new top-left and the resulting
    /// bottom-right corner stay inside the grid; a rejected move is silently
    /// ignored (state unchanged) and reported through the return value.
    pub fn pan(&mut self, direction: Direction) -> bool {
        let Point { x, y } = self.selection.top_left;
        let top_left = match direction {
            Direction::Left => Point::new(x - self.step_x, y),
            Direction::Right => Point::new(x + self.step_x, y),
            Direction::Up => Point::new(x, y - self.step_y),
            Direction::Down => Point::new(x, y + self.step_y),
        };
        let bottom_right = Point::new(
            top_left.x + self.selection.size.w as i32,
            top_left.y + self.selection.size.h as i32,
        );

        if !self.in_bounds(top_left) || !self.in_bounds(bottom_right) {
            debug!(?direction, ?top_left, "Pan rejected, out of bounds");
            return false;
        }

        self.selection.top_left = top_left;
        self.state = NavState::Moved;
        true
    }

    /// Unconditionally request a redraw (e.g. on an expose event). Does not
    /// move the box and does not invalidate anything.
    pub fn refresh(&mut self) {
        self.state = NavState::Moved;
    }

    /// Consume a pending redraw request, returning whether one was pending.
    pub fn take_redraw(&mut self) -> bool {
        let pending = self.state == NavState::Moved;
        self.state = NavState::Idle;
        pending
    }

    pub fn selection(&self) -> SelectionBox {
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_with_tenth_size() {
        let nav = Navigator::new(400, 300);
        let sel = nav.selection();
        assert_eq!(sel.top_left, Point::new(0, 0));
        assert_eq!(sel.size, Size::new(40, 30));
    }

    #[test]
    fn pan_right_moves_one_step() {
        let mut nav = Navigator::new(400, 300);
        assert!(nav.pan(Direction::Right));
        assert_eq!(nav.selection().top_left, Point::new(40, 0));
        assert!(nav.take_redraw());
    }

    #[test]
    fn pan_off_left_edge_is_rejected() {
        let mut nav = Navigator::new(400, 300);
        assert!(!nav.pan(Direction::Left));
        assert_eq!(nav.selection().top_left, Point::new(0, 0));
        assert!(!nav.take_redraw(), "rejected move must not request redraw");
    }

    #[test]
    fn pan_off_top_edge_is_rejected() {
        let mut nav = Navigator::new(400, 300);
        assert!(!nav.pan(Direction::Up));
        assert_eq!(nav.selection().top_left, Point::new(0, 0));
    }

    #[test]
    fn box_stops_before_right_edge() {
        let mut nav = Navigator::new(400, 300);
        let mut accepted = 0;
        while nav.pan(Direction::Right) {
            accepted += 1;
            assert!(accepted < 20, "box must eventually hit the edge");
        }
        let sel = nav.selection();
        // The bottom-right corner must still be a valid pixel.
        assert!(sel.top_left.x + sel.size.w as i32 <= 399);
        // One more step would cross the edge.
        assert!(sel.top_left.x + nav.step_x + sel.size.w as i32 >= 400);
    }

    #[test]
    fn box_stops_before_bottom_edge() {
        let mut nav = Navigator::new(400, 300);
        while nav.pan(Direction::Down) {}
        let sel = nav.selection();
        assert!(sel.top_left.y + sel.size.h as i32 <= 299);
    }

    #[test]
    fn refresh_requests_redraw_without_moving() {
        let mut nav = Navigator::new(400, 300);
        nav.refresh();
        assert!(nav.take_redraw());
        assert!(!nav.take_redraw(), "redraw request is consumed");
        assert_eq!(nav.selection().top_left, Point::new(0, 0));
    }

    #[test]
    fn round_trip_returns_to_origin() {
        let mut nav = Navigator::new(400, 300);
        assert!(nav.pan(Direction::Right));
        assert!(nav.pan(Direction::Down));
        assert!(nav.pan(Direction::Up));
        assert!(nav.pan(Direction::Left));
        assert_eq!(nav.selection().top_left, Point::new(0, 0));
    }
}
