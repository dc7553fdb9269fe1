use serde::Serialize;

use crate::color::ColorId;
use crate::error::ViewError;

/// An ordered sequence of colors forming a low→high iteration gradient.
///
/// The order is semantically meaningful: earlier entries color fast-escaping
/// points, later entries slow-escaping ones, and the **last** entry is
/// reserved for points that reached the iteration cap (in-set).
///
/// Bucketing rule: with `N` palette entries, the bucket width is
/// `iterations / (N - 1)` — the `N - 1` divisor (rather than `N`) leaves the
/// final entry as a dedicated in-set color reached only at or near the cap.
/// With `iterations = 9` and three colors this yields buckets
/// `0..=3`, `4..=7`, `8..=9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    colors: Vec<ColorId>,
}

/// Helper for deserialization — re-runs the size validation on load so a
/// restored palette can never bypass the two-entry minimum.
impl<'de> serde::Deserialize<'de> for Palette {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            colors: Vec<ColorId>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Palette::new(raw.colors).map_err(serde::de::Error::custom)
    }
}

impl Palette {
    /// Build a palette from an ordered color list. At least two entries are
    /// required: one gradient color and the in-set color.
    pub fn new(colors: Vec<ColorId>) -> crate::Result<Self> {
        if colors.len() < 2 {
            return Err(ViewError::TooFewColors(colors.len()));
        }
        Ok(Self { colors })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false // construction requires >= 2 entries
    }

    /// The dedicated color for points that never escaped.
    pub fn in_set_color(&self) -> ColorId {
        self.colors[self.colors.len() - 1]
    }

    /// Quantize an iteration count into a palette bucket index.
    ///
    /// Monotonic non-decreasing in `count` and defined for every count in
    /// `[0, iterations]`. When the bucket width underflows to zero
    /// (`iterations < N - 1`) the count itself is used as the (clamped)
    /// index instead of dividing.
    pub fn bucket_for(&self, count: u32, iterations: u32) -> usize {
        let last = self.colors.len() - 1;
        let step = iterations / last as u32;
        let raw = if step == 0 {
            count as usize
        } else {
            (count / step) as usize
        };
        raw.min(last)
    }

    /// Map an iteration count to its gradient color.
    pub fn color_for(&self, count: u32, iterations: u32) -> ColorId {
        self.colors[self.bucket_for(count, iterations)]
    }
}

/// Default gradient: cold hues for fast escapes through warm hues and white,
/// ending in black for the set interior.
impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                ColorId::DarkBlue,
                ColorId::Blue,
                ColorId::BrightBlue,
                ColorId::DarkPurple,
                ColorId::Purple,
                ColorId::BrightPurple,
                ColorId::DarkRed,
                ColorId::Red,
                ColorId::BrightRed,
                ColorId::DarkOrange,
                ColorId::Orange,
                ColorId::BrightOrange,
                ColorId::DarkYellow,
                ColorId::Yellow,
                ColorId::BrightYellow,
                ColorId::White,
                ColorId::Black,
            ],
        }
    }
}
