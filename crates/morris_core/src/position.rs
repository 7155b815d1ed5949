//! Board positions for Three Men's Morris.

use serde::{Deserialize, Serialize};

/// A position on the 3x3 morris board.
///
/// Positions map to indices 0-8 in row-major order (index = row * 3 + col).
/// Because the type is a fieldless enum, out-of-range cells are
/// unrepresentable; the only fallible boundary is [`Position::from_index`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts the position to its board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }

    /// Row of the position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of the position (0-2, left to right).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::Center => "center",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Coordinate notation: column letter a-c plus row digit 1-3.
    ///
    /// "a1" is the top-left cell, "b2" the center, "c3" the bottom-right.
    pub fn coord(self) -> String {
        let col = (b'a' + self.col() as u8) as char;
        format!("{}{}", col, self.row() + 1)
    }

    /// Parses a position from an index ("4"), a coordinate ("b2"), or a
    /// label ("center"), case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        let mut chars = s.chars();
        if let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next())
            && let Some(col) = match c.to_ascii_lowercase() {
                'a' => Some(0),
                'b' => Some(1),
                'c' => Some(2),
                _ => None,
            }
            && let Some(row) = match r {
                '1' => Some(0),
                '2' => Some(1),
                '3' => Some(2),
                _ => None,
            }
        {
            return Self::from_index(row * 3 + col);
        }
        Self::from_label(s)
    }

    fn from_label(s: &str) -> Option<Self> {
        let needle = s.to_lowercase();
        <Self as strum::IntoEnumIterator>::iter().find(|pos| pos.label() == needle)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
