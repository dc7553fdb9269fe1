pub mod color;
pub mod error;
pub mod navigator;
pub mod palette;
pub mod session;
pub mod surface;

pub use color::ColorId;
pub use error::ViewError;
pub use navigator::{Direction, Navigator, SelectionBox};
pub use palette::Palette;
pub use session::{InputEvent, Outcome, Session};
pub use surface::{Point, RenderSurface, Size};

/// Convenience result type for the view crate.
pub type Result<T> = std::result::Result<T, ViewError>;
