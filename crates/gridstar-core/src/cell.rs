//! The [`Cell`] type: a single board square, free or blocked.

/// Occupancy of one board square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    /// Marker written for a free square in problem files.
    pub const FREE_MARKER: u8 = 0;
    /// Marker written for a blocked square in problem files.
    pub const BLOCKED_MARKER: u8 = 1;

    /// Decode a file marker. `None` for anything but `0` or `1`.
    #[inline]
    pub const fn from_marker(marker: i64) -> Option<Self> {
        match marker {
            0 => Some(Self::Free),
            1 => Some(Self::Blocked),
            _ => None,
        }
    }

    /// The file marker for this cell.
    #[inline]
    pub const fn marker(self) -> u8 {
        match self {
            Self::Free => Self::FREE_MARKER,
            Self::Blocked => Self::BLOCKED_MARKER,
        }
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}
