use serde::{Deserialize, Serialize};

/// A named color identifier.
///
/// The display backend owns the actual pixel values; the core only ever
/// speaks in these identifiers. The set is fixed: black/white/greys plus a
/// bright/plain/dark triple per hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorId {
    Black,
    White,
    Grey,
    DarkGrey,

    BrightRed,
    Red,
    DarkRed,

    BrightOrange,
    Orange,
    DarkOrange,

    BrightYellow,
    Yellow,
    DarkYellow,

    BrightGreen,
    Green,
    DarkGreen,

    BrightBlue,
    Blue,
    DarkBlue,

    BrightPurple,
    Purple,
    DarkPurple,
}

impl ColorId {
    /// Every color, in declaration order.
    pub const ALL: [ColorId; 22] = [
        ColorId::Black,
        ColorId::White,
        ColorId::Grey,
        ColorId::DarkGrey,
        ColorId::BrightRed,
        ColorId::Red,
        ColorId::DarkRed,
        ColorId::BrightOrange,
        ColorId::Orange,
        ColorId::DarkOrange,
        ColorId::BrightYellow,
        ColorId::Yellow,
        ColorId::DarkYellow,
        ColorId::BrightGreen,
        ColorId::Green,
        ColorId::DarkGreen,
        ColorId::BrightBlue,
        ColorId::Blue,
        ColorId::DarkBlue,
        ColorId::BrightPurple,
        ColorId::Purple,
        ColorId::DarkPurple,
    ];

    /// Human-readable name, e.g. for a backend's color lookup.
    pub fn name(self) -> &'static str {
        match self {
            ColorId::Black => "black",
            ColorId::White => "white",
            ColorId::Grey => "grey",
            ColorId::DarkGrey => "dark grey",
            ColorId::BrightRed => "bright red",
            ColorId::Red => "red",
            ColorId::DarkRed => "dark red",
            ColorId::BrightOrange => "bright orange",
            ColorId::Orange => "orange",
            ColorId::DarkOrange => "dark orange",
            ColorId::BrightYellow => "bright yellow",
            ColorId::Yellow => "yellow",
            ColorId::DarkYellow => "dark yellow",
            ColorId::BrightGreen => "bright green",
            ColorId::Green => "green",
            ColorId::DarkGreen => "dark green",
            ColorId::BrightBlue => "bright blue",
            ColorId::Blue => "blue",
            ColorId::DarkBlue => "dark blue",
            ColorId::BrightPurple => "bright purple",
            ColorId::Purple => "purple",
            ColorId::DarkPurple => "dark purple",
        }
    }

    /// Whether overlaid text/markers need a dark counter-color to stay
    /// readable on top of this one.
    pub fn is_bright(self) -> bool {
        matches!(
            self,
            ColorId::White
                | ColorId::Grey
                | ColorId::BrightRed
                | ColorId::BrightOrange
                | ColorId::BrightYellow
                | ColorId::Yellow
                | ColorId::BrightGreen
                | ColorId::BrightBlue
                | ColorId::BrightPurple
        )
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
