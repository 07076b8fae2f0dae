//! The 16-color console palette and its name/alias lookup.
//!
//! Color names resolve case-insensitively from either the full name
//! (`darkred`) or a 1-2 letter alias (`dr`). Both `gray` and `grey`
//! spellings are accepted.

/// A color from the classic 16-color console palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Resolves a color name or alias, case-insensitively.
    ///
    /// Returns `None` for unrecognized names; callers treat that as a no-op
    /// rather than an error.
    pub fn parse(name: &str) -> Option<Color> {
        match name.to_lowercase().as_str() {
            "b" | "blue" => Some(Color::Blue),
            "r" | "red" => Some(Color::Red),
            "n" | "green" => Some(Color::Green),
            "w" | "white" => Some(Color::White),
            "y" | "yellow" => Some(Color::Yellow),
            "m" | "magenta" => Some(Color::Magenta),
            "c" | "cyan" => Some(Color::Cyan),
            "g" | "gray" | "grey" => Some(Color::Gray),
            "db" | "darkblue" => Some(Color::DarkBlue),
            "dr" | "darkred" => Some(Color::DarkRed),
            "dn" | "darkgreen" => Some(Color::DarkGreen),
            "dy" | "darkyellow" => Some(Color::DarkYellow),
            "dm" | "darkmagenta" => Some(Color::DarkMagenta),
            "dc" | "darkcyan" => Some(Color::DarkCyan),
            "dg" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
            "k" | "black" => Some(Color::Black),
            _ => None,
        }
    }

    /// Canonical lowercase name, parseable back via [`Color::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkBlue => "darkblue",
            Color::DarkGreen => "darkgreen",
            Color::DarkCyan => "darkcyan",
            Color::DarkRed => "darkred",
            Color::DarkMagenta => "darkmagenta",
            Color::DarkYellow => "darkyellow",
            Color::Gray => "gray",
            Color::DarkGray => "darkgray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as Ct;
        match color {
            Color::Black => Ct::Black,
            Color::DarkBlue => Ct::DarkBlue,
            Color::DarkGreen => Ct::DarkGreen,
            Color::DarkCyan => Ct::DarkCyan,
            Color::DarkRed => Ct::DarkRed,
            Color::DarkMagenta => Ct::DarkMagenta,
            Color::DarkYellow => Ct::DarkYellow,
            Color::Gray => Ct::Grey,
            Color::DarkGray => Ct::DarkGrey,
            Color::Blue => Ct::Blue,
            Color::Green => Ct::Green,
            Color::Cyan => Ct::Cyan,
            Color::Red => Ct::Red,
            Color::Magenta => Ct::Magenta,
            Color::Yellow => Ct::Yellow,
            Color::White => Ct::White,
        }
    }
}
